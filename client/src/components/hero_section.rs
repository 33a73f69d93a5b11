//! Hero section: headline, call-to-action buttons and floating shapes.

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::state::content::HERO_SUBTITLE;
use crate::state::site::Section;
use crate::util::motion::{FLOAT_SHAPES, Keyframes, REVEAL, SECTION};

#[component]
pub fn HeroSection(#[prop(into)] leaving: Signal<bool>, on_select: Callback<Section>) -> impl IntoView {
    view! {
        <SectionFrame section=Section::Hero leaving=leaving>
            <div class="hero-content">
                <h1 class="hero-title" style=REVEAL.delayed(200).css(Keyframes::FadeUp)>
                    <span class="gradient-text">"CREATIVE"</span>
                    " DEVELOPER"
                </h1>
                <p class="hero-subtitle" style=REVEAL.delayed(400).css(Keyframes::FadeUp)>
                    {HERO_SUBTITLE}
                </p>
                <div class="hero-cta" style=REVEAL.delayed(600).css(Keyframes::FadeUp)>
                    <button class="cta-button" on:click=move |_| on_select.run(Section::Projects)>
                        "View My Work"
                    </button>
                    <button class="cta-button secondary" on:click=move |_| on_select.run(Section::Contact)>
                        "Contact Me"
                    </button>
                </div>
            </div>
            <div class="hero-visual" style=SECTION.delayed(800).css(Keyframes::ScaleIn)>
                <div class="floating-shapes">
                    {FLOAT_SHAPES
                        .iter()
                        .enumerate()
                        .map(|(index, (keyframes, transition))| {
                            view! {
                                <div
                                    class=format!("shape shape-{}", index + 1)
                                    style=transition.css(*keyframes)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SectionFrame>
    }
}
