//! # portfolio-client
//!
//! Leptos + WASM frontend for the animated portfolio page.
//!
//! This crate contains the root application component, the section pages,
//! presentational components, the ephemeral site state and the motion
//! helpers that turn timing descriptors into CSS. The `ssr` feature renders
//! the page shell on the server; the `hydrate` feature attaches the browser
//! behaviour (timers, pointer tracking, spring-smoothed cursor).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
