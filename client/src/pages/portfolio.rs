//! Portfolio page — the root coordinator of the site.
//!
//! ARCHITECTURE
//! ============
//! Owns the browser-side lifecycle around `SiteState`: the one-shot loading
//! timer, the window pointer subscription and the delayed completion of
//! section leave transitions. Children only see read-only signals and the
//! `on_select` callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! During SSR none of the browser hooks run, so the shell always renders the
//! loading overlay; hydration then takes over and starts the timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::custom_cursor::CustomCursor;
use crate::components::hero_section::HeroSection;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navigation::Navigation;
use crate::components::projects_section::ProjectsSection;
use crate::state::site::{Section, SiteState};

/// Portfolio page — loading overlay first, then cursor, navigation and the
/// single active section.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    let is_loading = Memo::new(move |_| site.with(SiteState::is_loading));
    let active = Memo::new(move |_| site.with(SiteState::active_section));
    let displayed = Memo::new(move |_| site.with(|s| s.presence.displayed()));
    let leaving = Memo::new(move |_| site.with(|s| s.presence.is_leaving()));
    let pointer = Memo::new(move |_| site.with(|s| s.pointer));

    let alive = Arc::new(AtomicBool::new(true));
    let alive_select = alive.clone();
    let on_select = Callback::new(move |section: Section| select_section(site, &alive_select, section));

    #[cfg(feature = "hydrate")]
    start_browser_hooks(site, alive.clone());

    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    view! {
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen/> }>
            <CustomCursor pointer=pointer/>
            <div class="container">
                <Navigation active=active on_select=on_select/>
                <main class="main-content">
                    {move || render_section(displayed.get(), leaving.into(), on_select)}
                </main>
            </div>
        </Show>
    }
}

fn render_section(section: Section, leaving: Signal<bool>, on_select: Callback<Section>) -> AnyView {
    match section {
        Section::Hero => view! { <HeroSection leaving=leaving on_select=on_select/> }.into_any(),
        Section::About => view! { <AboutSection leaving=leaving/> }.into_any(),
        Section::Projects => view! { <ProjectsSection leaving=leaving/> }.into_any(),
        Section::Contact => view! { <ContactSection leaving=leaving/> }.into_any(),
    }
}

/// Apply a navigation choice and schedule the end of the leave transition.
///
/// The leave only completes while `alive` is set; once the page is torn down
/// a pending completion is dropped.
fn select_section(site: RwSignal<SiteState>, alive: &Arc<AtomicBool>, section: Section) {
    #[cfg(feature = "hydrate")]
    log::debug!("section selected: {}", section.id());

    let Some(token) = site.try_update(|s| s.select_section(section)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let leave = std::time::Duration::from_millis(u64::from(crate::util::motion::SECTION.duration_ms));
            gloo_timers::future::sleep(leave).await;
            finish_leave(site, &alive, token);
        });
    }

    // Without a browser clock there is nothing to wait for.
    #[cfg(not(feature = "hydrate"))]
    finish_leave(site, alive, token);
}

fn finish_leave(site: RwSignal<SiteState>, alive: &AtomicBool, token: u64) {
    if !alive.load(Ordering::Relaxed) {
        return;
    }
    let _ = site.try_update(|s| s.finish_leave(token));
}

/// Loading timer and window pointer subscription, both torn down with the page.
#[cfg(feature = "hydrate")]
fn start_browser_hooks(site: RwSignal<SiteState>, alive: Arc<AtomicBool>) {
    use std::time::Duration;

    use crate::state::site::LOADING_DELAY;

    let mount_ms = js_sys::Date::now();
    let since_mount = move || Duration::from_secs_f64(((js_sys::Date::now() - mount_ms) / 1000.0).max(0.0));

    // Timers can fire early after a tab wakes; re-check against the clock.
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(LOADING_DELAY.saturating_sub(since_mount())).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match site.try_update(|s| s.advance_loading(since_mount())) {
                Some(true) => {
                    log::debug!("loading finished");
                    return;
                }
                Some(false) => {}
                None => return,
            }
        }
    });

    let pointer_listener = window_event_listener(leptos::ev::mousemove, move |ev| {
        let _ = site.try_update(|s| s.set_pointer(f64::from(ev.client_x()), f64::from(ev.client_y())));
    });

    on_cleanup(move || pointer_listener.remove());
}

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;
