//! # client
//!
//! Leptos + WASM frontend for the Shopfloor production management app.
//!
//! This crate owns the browser side of authentication gating: the session
//! context, the route guard, intended-URL preservation and the post-login
//! redirect coordinator, plus the pages they protect.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
