//! Navigation bar switching between the four sections.

use leptos::prelude::*;

use crate::state::content::NAV_ITEMS;
use crate::state::site::Section;

/// Renders one button per navigation item. Clicking calls `on_select`
/// with that item's section; the active item carries an indicator.
#[component]
pub fn Navigation(#[prop(into)] active: Signal<Section>, on_select: Callback<Section>) -> impl IntoView {
    view! {
        <nav class="navigation">
            <ul>
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let section = item.section;
                        let is_active = move || active.get() == section;
                        view! {
                            <li>
                                <button
                                    class:active=is_active
                                    data-section=section.id()
                                    on:click=move |_| on_select.run(section)
                                >
                                    {item.label}
                                    <Show when=is_active>
                                        <div class="nav-indicator"></div>
                                    </Show>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
