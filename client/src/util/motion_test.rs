use super::*;

#[test]
fn transition_new_defaults_to_single_ease_out() {
    let t = Transition::new(500);
    assert_eq!(t.delay_ms, 0);
    assert_eq!(t.easing, Easing::EaseOut);
    assert_eq!(t.repeat, Repeat::Once);
}

#[test]
fn css_renders_entrance_with_backwards_fill() {
    let css = SECTION.delayed(200).css(Keyframes::FadeUp);
    assert_eq!(css, "animation: fade-up 500ms ease-out 200ms 1 backwards;");
}

#[test]
fn css_renders_exit_with_forwards_fill() {
    let css = SECTION.css(Keyframes::SlideOut);
    assert_eq!(css, "animation: slide-out 500ms ease-out 0ms 1 forwards;");
}

#[test]
fn spinner_loops_linearly_forever() {
    assert_eq!(SPINNER.css(Keyframes::Spin), "animation: spin 1000ms linear 0ms infinite backwards;");
}

#[test]
fn staggered_adds_step_per_index() {
    let base = Transition::new(300).delayed(500);
    assert_eq!(base.staggered(100, 0).delay_ms, 500);
    assert_eq!(base.staggered(100, 3).delay_ms, 800);
}

#[test]
fn staggered_saturates_instead_of_overflowing() {
    let t = Transition::new(1).delayed(u32::MAX - 1).staggered(1000, 5);
    assert_eq!(t.delay_ms, u32::MAX);
}

#[test]
fn float_shapes_have_distinct_timings() {
    let durations: Vec<u32> = FLOAT_SHAPES.iter().map(|(_, t)| t.duration_ms).collect();
    assert_eq!(durations, vec![6000, 5000, 7000]);
    let delays: Vec<u32> = FLOAT_SHAPES.iter().map(|(_, t)| t.delay_ms).collect();
    assert_eq!(delays, vec![0, 500, 1000]);
    assert!(FLOAT_SHAPES.iter().all(|(_, t)| t.repeat == Repeat::Forever));
}
