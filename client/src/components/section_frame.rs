//! Shared `<section>` wrapper playing the enter/leave animation.

#[cfg(test)]
#[path = "section_frame_test.rs"]
mod section_frame_test;

use leptos::prelude::*;

use crate::state::site::Section;
use crate::util::motion::{Keyframes, SECTION};

/// Animation for a section view: the hero rises, the others slide sideways.
#[must_use]
pub fn presence_animation(section: Section, leaving: bool) -> String {
    let keyframes = match (section, leaving) {
        (Section::Hero, false) => Keyframes::FadeUp,
        (Section::Hero, true) => Keyframes::FadeUpOut,
        (Section::About | Section::Projects | Section::Contact, false) => Keyframes::SlideIn,
        (Section::About | Section::Projects | Section::Contact, true) => Keyframes::SlideOut,
    };
    SECTION.css(keyframes)
}

#[component]
pub fn SectionFrame(section: Section, #[prop(into)] leaving: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <section
            class=format!("section {}", section.id())
            class:section--leaving=move || leaving.get()
            style=move || presence_animation(section, leaving.get())
        >
            {children()}
        </section>
    }
}
