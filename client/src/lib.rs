//! # library-client
//!
//! Leptos + WASM front-end for the library management system.
//!
//! This crate contains pages, components, the session store, and the
//! request gateway that talks to the external library backend. It renders
//! on the server (`ssr`) through the `library-portal` host and hydrates in
//! the browser (`hydrate`).

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
