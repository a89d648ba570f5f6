//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The gating and draft logic lives in `sitekit`; this crate wires it to the
//! browser: web storage, the static loading screen, image elements, and
//! `gloo-timers` timeouts. Without the `hydrate` feature every browser adapter
//! is a no-op so the same components render on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::Document);
}
