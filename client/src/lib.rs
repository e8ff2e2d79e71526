//! # client
//!
//! Leptos + WASM frontend for the TuitionPro landing page.
//!
//! The navigation header's state machine lives in `state::nav`; browser
//! bindings for the scroll listener, section scrolling and the dark theme
//! marker live in `util`. `content` holds the static copy rendered by the
//! page sections.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
