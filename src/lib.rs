//! # arbor-client
//!
//! Leptos + WASM front-end for Arbor. Contains the login page and its
//! submission workflow, the authenticated profile landing page, shared
//! layout components, client-side state, and the HTTP gateway to the
//! hosted auth backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
