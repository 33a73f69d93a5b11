//! Contact section: a display-only form and static contact details.
//!
//! The form is layout only. Submitting it is swallowed so nothing is sent
//! anywhere and the page does not reload.

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::state::content::CONTACT;
use crate::state::site::Section;
use crate::util::motion::{Keyframes, REVEAL};

#[component]
pub fn ContactSection(#[prop(into)] leaving: Signal<bool>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::debug!("contact form submit ignored");
    };

    view! {
        <SectionFrame section=Section::Contact leaving=leaving>
            <h2>"Get In Touch"</h2>
            <div class="contact-content">
                <form class="contact-form" style=REVEAL.delayed(200).css(Keyframes::FadeUp) on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input type="text" id="name"/>
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input type="email" id="email"/>
                    </div>
                    <div class="form-group">
                        <label for="message">"Message"</label>
                        <textarea id="message" rows="5"></textarea>
                    </div>
                    <button type="submit" class="submit-button">"Send Message"</button>
                </form>
                <div class="contact-info" style=REVEAL.delayed(400).css(Keyframes::FadeUp)>
                    <h3>"Contact Information"</h3>
                    <p>"Feel free to reach out for collaboration or just to say hello!"</p>
                    <div class="contact-details">
                        <div class="contact-item">
                            <strong>"Email:"</strong>
                            " "
                            {CONTACT.email}
                        </div>
                        <div class="contact-item">
                            <strong>"Location:"</strong>
                            " "
                            {CONTACT.location}
                        </div>
                        <div class="contact-item">
                            <strong>"Availability:"</strong>
                            " "
                            {CONTACT.availability}
                        </div>
                    </div>
                    <div class="social-links">
                        {CONTACT
                            .social_links
                            .iter()
                            .map(|name| view! { <a href="#" class="social-link">{*name}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </SectionFrame>
    }
}
