//! # client
//!
//! Leptos frontend for the Tech Friends IO marketing site. Renders on the
//! server through `leptos_axum` and hydrates in the browser.
//!
//! The crate holds the route table (`routes`), static page copy (`content`,
//! `pages`), shared components, the pure state machines behind the shell and
//! forms (`state`), and the JSON client for the server's `/api` endpoints
//! (`net`).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
