//! # client
//!
//! Leptos + WASM frontend whose protected routes are gated by a route guard.
//!
//! The guard decision (`util::auth`) is a pure function of a credential and
//! the protected view. `components::route_guard` interprets it for the
//! router, and `app` wires it around every protected page.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
