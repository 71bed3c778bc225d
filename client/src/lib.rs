//! # campus-client
//!
//! Leptos + WASM frontend for the campus administration console: a login
//! screen and a students management page backed by an external REST API.
//!
//! This crate contains pages, presentational components, page state and the
//! flows that mutate it, and the network layer. The root `campus` binary
//! renders it server-side; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
