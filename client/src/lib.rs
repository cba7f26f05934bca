//! # conference-client
//!
//! Leptos frontend for the conference listing site: the public listing, the
//! admin login page, and the gated admin pages.
//!
//! The admin session lives in browser storage (`util::session_store`) and
//! is checked on every protected mount by `util::session_gate`. The gate
//! only decides what to render; the server re-validates every mutation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
