//! # shipping-client
//!
//! Leptos + WASM frontend for the parcel shipping service. Talks to the
//! shipping gateway over same-origin `/auth/*` and `/api/*` requests carrying
//! the session cookie.
//!
//! The crate holds pages, components, the session store, the gateway client,
//! and the pure helpers (access rules, validation, listing) those build on.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
