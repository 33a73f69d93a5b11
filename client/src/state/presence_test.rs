use super::*;

#[test]
fn default_presents_hero() {
    let presence = SectionPresence::default();
    assert_eq!(presence.active(), Section::Hero);
    assert_eq!(presence.displayed(), Section::Hero);
    assert!(!presence.is_leaving());
}

#[test]
fn selecting_displayed_section_is_noop() {
    let mut presence = SectionPresence::default();
    assert_eq!(presence.select(Section::Hero), None);
    assert!(!presence.is_leaving());
}

#[test]
fn selecting_other_section_starts_leave() {
    let mut presence = SectionPresence::default();
    let token = presence.select(Section::About);
    assert!(token.is_some());
    assert!(presence.is_leaving());
    // The old view stays mounted until the leave completes.
    assert_eq!(presence.displayed(), Section::Hero);
    assert_eq!(presence.active(), Section::About);
}

#[test]
fn retarget_during_leave_reuses_pending_token() {
    let mut presence = SectionPresence::default();
    let token = presence.select(Section::About).unwrap();
    assert_eq!(presence.select(Section::Contact), None);
    assert!(presence.finish_leave(token));
    assert_eq!(presence.displayed(), Section::Contact);
}

#[test]
fn reselecting_leaving_section_cancels_leave() {
    let mut presence = SectionPresence::default();
    let token = presence.select(Section::About).unwrap();
    assert_eq!(presence.select(Section::Hero), None);
    assert!(!presence.is_leaving());
    assert_eq!(presence.active(), Section::Hero);
    assert_eq!(presence.displayed(), Section::Hero);
    // The timer started for the cancelled leave must not swap anything.
    assert!(!presence.finish_leave(token));
    assert!(!presence.is_leaving());
    assert_eq!(presence.displayed(), Section::Hero);
}

#[test]
fn leave_after_cancelled_leave_gets_fresh_token() {
    let mut presence = SectionPresence::default();
    let cancelled = presence.select(Section::About).unwrap();
    presence.select(Section::Hero);
    let next = presence.select(Section::Contact).unwrap();
    assert_ne!(next, cancelled);
    assert!(!presence.finish_leave(cancelled));
    assert!(presence.finish_leave(next));
    assert_eq!(presence.displayed(), Section::Contact);
}

#[test]
fn stale_token_is_ignored() {
    let mut presence = SectionPresence::default();
    let first = presence.select(Section::About).unwrap();
    assert!(presence.finish_leave(first));
    let second = presence.select(Section::Projects).unwrap();
    assert!(!presence.finish_leave(first));
    assert!(presence.is_leaving());
    assert!(presence.finish_leave(second));
    assert_eq!(presence.displayed(), Section::Projects);
}

#[test]
fn finish_leave_without_pending_leave_is_rejected() {
    let mut presence = SectionPresence::default();
    assert!(!presence.finish_leave(0));
    assert_eq!(presence.displayed(), Section::Hero);
}

#[test]
fn any_section_reachable_from_any_other() {
    for from in Section::ALL {
        for to in Section::ALL {
            let mut presence = SectionPresence::default();
            if let Some(token) = presence.select(from) {
                presence.finish_leave(token);
            }
            if let Some(token) = presence.select(to) {
                assert!(presence.finish_leave(token));
            }
            assert_eq!(presence.displayed(), to);
        }
    }
}
