use super::*;

#[test]
fn skill_bar_style_sets_literal_width() {
    let react = SKILLS[1];
    let style = skill_bar_style(&react, 1);
    assert!(style.starts_with("width: 95%;"), "{style}");
}

#[test]
fn skill_bar_fill_delay_is_staggered_per_row() {
    assert!(skill_bar_style(&SKILLS[0], 0).contains("fill-bar 1000ms ease-out 500ms"));
    assert!(skill_bar_style(&SKILLS[3], 3).contains("fill-bar 1000ms ease-out 800ms"));
}
