//! Full-screen overlay shown while the page starts up.

use leptos::prelude::*;

use crate::util::motion::{Keyframes, REVEAL, SPINNER};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-spinner" style=SPINNER.css(Keyframes::Spin)>
                <div class="spinner-circle"></div>
            </div>
            <h2 style=REVEAL.delayed(500).css(Keyframes::FadeUp)>"Loading Portfolio"</h2>
        </div>
    }
}
