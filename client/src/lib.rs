//! # client
//!
//! Leptos + WASM frontend for profile onboarding.
//!
//! Two pages share one record in browser `localStorage`: the onboarding form
//! writes it and redirects, the dashboard reads it back on load. The crate is
//! built twice: with `hydrate` into the browser bundle and with `ssr` into
//! the server binary.

pub mod app;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
