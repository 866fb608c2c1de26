//! # taskboard
//!
//! Leptos + WASM front end for a task and team manager backed by an external
//! REST API. Replaces the Next.js `app/` router client with a Rust-native UI
//! layer.
//!
//! The crate contains pages, components, form draft state, the gated HTTP
//! client, and the session cookie store. Everything that needs a browser is
//! gated behind the `hydrate` feature so the rest of the crate (and its unit
//! tests) builds on a native target with no features.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
