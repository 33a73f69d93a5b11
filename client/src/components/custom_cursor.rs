//! Decorative pointer followers: a tight dot and a looser outline ring.
//!
//! DESIGN
//! ======
//! The pointer signal holds raw coordinates. A frame loop (browser only)
//! advances both spring followers and publishes the smoothed positions; the
//! markers themselves are pure transforms. The loop ends once both markers
//! rest on the pointer and the next pointer change starts a new one.

use leptos::prelude::*;

use crate::state::site::Pointer;
use crate::util::spring::{CursorMarkers, translate_css};

#[cfg(feature = "hydrate")]
const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

#[component]
pub fn CustomCursor(#[prop(into)] pointer: Signal<Pointer>) -> impl IntoView {
    let markers = StoredValue::new(CursorMarkers::default());
    let dot = RwSignal::new(markers.with_value(|m| m.dot.position()));
    let outline = RwSignal::new(markers.with_value(|m| m.outline.position()));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let running = Arc::new(AtomicBool::new(false));
        let alive_effect = alive.clone();
        Effect::new(move || {
            let _ = pointer.get();
            if !alive_effect.load(Ordering::Relaxed) || running.swap(true, Ordering::Relaxed) {
                return;
            }
            let alive = alive_effect.clone();
            let running = running.clone();
            leptos::task::spawn_local(async move {
                let mut last_ms = js_sys::Date::now();
                loop {
                    gloo_timers::future::sleep(FRAME_INTERVAL).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    let now_ms = js_sys::Date::now();
                    let dt_secs = ((now_ms - last_ms) / 1000.0).max(0.0);
                    last_ms = now_ms;

                    let Some(target) = pointer.try_get_untracked() else {
                        break;
                    };
                    let Some(settled) = markers.try_update_value(|m| m.step(target, dt_secs)) else {
                        break;
                    };
                    markers.with_value(|m| {
                        dot.set(m.dot.position());
                        outline.set(m.outline.position());
                    });
                    if settled {
                        break;
                    }
                }
                running.store(false, Ordering::Relaxed);
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = pointer;

    view! {
        <div class="cursor-dot" aria-hidden="true" style=move || translate_css(dot.get())></div>
        <div class="cursor-outline" aria-hidden="true" style=move || translate_css(outline.get())></div>
    }
}
