//! About section: biography and animated skill bars.

#[cfg(test)]
#[path = "about_section_test.rs"]
mod about_section_test;

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::state::content::{ABOUT_PARAGRAPHS, SKILLS, Skill};
use crate::state::site::Section;
use crate::util::motion::{Keyframes, REVEAL, SKILL_FILL};

const SKILL_STAGGER_MS: u32 = 100;

/// Inline style of a skill bar: final width plus a staggered fill animation.
#[must_use]
pub fn skill_bar_style(skill: &Skill, index: usize) -> String {
    format!(
        "width: {}; {}",
        skill.percent_label(),
        SKILL_FILL.staggered(SKILL_STAGGER_MS, index).css(Keyframes::FillBar)
    )
}

#[component]
pub fn AboutSection(#[prop(into)] leaving: Signal<bool>) -> impl IntoView {
    view! {
        <SectionFrame section=Section::About leaving=leaving>
            <h2>"About Me"</h2>
            <div class="about-content">
                <div class="about-text" style=REVEAL.delayed(200).css(Keyframes::FadeUp)>
                    {ABOUT_PARAGRAPHS.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>
                <div class="skills" style=REVEAL.delayed(400).css(Keyframes::FadeUp)>
                    <h3>"Skills"</h3>
                    <div class="skills-grid">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| view! { <SkillRow skill=*skill index=index/> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </SectionFrame>
    }
}

#[component]
fn SkillRow(skill: Skill, index: usize) -> impl IntoView {
    view! {
        <div class="skill-item" style=REVEAL.staggered(SKILL_STAGGER_MS, index).css(Keyframes::SlideIn)>
            <div class="skill-header">
                <span>{skill.name}</span>
                <span>{skill.percent_label()}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" style=skill_bar_style(&skill, index)></div>
            </div>
        </div>
    }
}
