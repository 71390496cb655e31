//! # client
//!
//! Leptos + WASM frontend for publishing pins to a social-bookmarking
//! platform through a credential-holding backend.
//!
//! `state::workflow` is the sans-IO controller that decides every step of the
//! authorize, browse, parse and publish flow. `pages::workflow` drives it from
//! the browser, `net` carries the backend calls, and `components` render the
//! controller state.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
