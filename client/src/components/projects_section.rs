//! Projects section: a grid of fixed project cards.

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::state::content::{PROJECTS, Project};
use crate::state::site::Section;
use crate::util::motion::{Keyframes, REVEAL};

#[component]
pub fn ProjectsSection(#[prop(into)] leaving: Signal<bool>) -> impl IntoView {
    view! {
        <SectionFrame section=Section::Projects leaving=leaving>
            <h2>"Featured Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=*project index=index/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="project-card"
            data-project-id=project.id.to_string()
            style=REVEAL.staggered(100, index).css(Keyframes::FadeUp)
        >
            <div class="project-image">
                <div class="project-overlay">
                    <button class="project-button">"View Project"</button>
                </div>
            </div>
            <div class="project-content">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
