use super::*;

use leptos::reactive::owner::Owner;

fn with_site(test: impl FnOnce(RwSignal<SiteState>, Arc<AtomicBool>)) {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteState::default());
        let alive = Arc::new(AtomicBool::new(true));
        test(site, alive);
    });
}

// =============================================================
// select_section
// =============================================================

#[test]
fn select_projects_displays_projects() {
    with_site(|site, alive| {
        select_section(site, &alive, Section::Projects);
        assert_eq!(site.with_untracked(SiteState::active_section), Section::Projects);
        assert_eq!(site.with_untracked(|s| s.presence.displayed()), Section::Projects);
        assert!(!site.with_untracked(|s| s.presence.is_leaving()));
    });
}

#[test]
fn select_displayed_section_is_noop() {
    with_site(|site, alive| {
        select_section(site, &alive, Section::Hero);
        assert_eq!(site.with_untracked(|s| s.presence.displayed()), Section::Hero);
        assert!(!site.with_untracked(|s| s.presence.is_leaving()));
    });
}

#[test]
fn every_nav_choice_ends_on_matching_view() {
    with_site(|site, alive| {
        for section in [Section::About, Section::Contact, Section::Hero, Section::Projects] {
            select_section(site, &alive, section);
            assert_eq!(site.with_untracked(|s| s.presence.displayed()), section);
        }
    });
}

#[test]
fn select_after_teardown_leaves_view_in_place() {
    with_site(|site, alive| {
        alive.store(false, Ordering::Relaxed);
        select_section(site, &alive, Section::Contact);
        assert_eq!(site.with_untracked(SiteState::active_section), Section::Contact);
        assert_eq!(site.with_untracked(|s| s.presence.displayed()), Section::Hero);
        assert!(site.with_untracked(|s| s.presence.is_leaving()));
    });
}
