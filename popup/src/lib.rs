//! # popup
//!
//! Leptos + WASM browser-extension popup for inspecting and editing the
//! `localStorage` of the active tab.
//!
//! This crate contains the popup's components, its UI state, and the
//! `chrome.scripting` accessor. All storage semantics (decoding, formatting,
//! the edit session, action outcomes) come from the `inspector` crate; the
//! popup only wires them to signals and DOM events.
//!
//! Browser-only code is gated behind the `csr` feature so the crate still
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the popup.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
