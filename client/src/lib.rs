//! # client
//!
//! Leptos + WASM frontend for the UNBIAS.AI research desktop.
//!
//! The desk registry (`state::desk`) decides which module windows are open
//! and which one is in front; each window hosts a content panel that talks
//! to the research REST API through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Route `log` records emitted by dependencies to the browser console.
    let _ = console_log::init_with_level(log::Level::Warn);
    leptos::mount::hydrate_body(app::App);
}
