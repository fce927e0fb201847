//! # client
//!
//! Leptos + WASM frontend of the Falco web performance dashboard.
//!
//! This crate contains pages, components, application state, REST types and
//! the pure formatting and chart geometry they rely on. The server crate
//! renders it with SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
