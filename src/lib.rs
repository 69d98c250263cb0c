//! # bazar-client
//!
//! Leptos + WASM frontend for the Bazar marketplace/library application.
//! Users register, log in, and manage their profile against a REST backend;
//! listing, order, and chat screens live on top of the same session core.
//!
//! This crate contains pages, components, application state, network types,
//! and the session lifecycle manager (`session`) that owns the bearer token,
//! the current user, and the route-guard decisions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
