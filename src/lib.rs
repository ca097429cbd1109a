//! # storefront
//!
//! Leptos + WASM front end for the storefront's home and profile screens.
//!
//! This crate contains pages, components, application state, REST types and
//! the API client. The surrounding page shell (routing, session bootstrap)
//! lives outside; `app::App` only provides the shared contexts and mounts
//! the screens shipped here.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; keep that one.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(app::App);
}
