//! # storefront
//!
//! Leptos + WASM dashboard for a small shop: overview, offer templates, sales
//! tracking, inventory, and marketing tips.
//!
//! When the app runs inside an embedding frame, every console diagnostic,
//! uncaught error, unhandled rejection, and panic is mirrored to the parent
//! page through the `relay` crate. [`diagnostics`] wires that up.

pub mod app;
pub mod components;
pub mod diagnostics;
pub mod pages;
pub mod state;
pub mod util;

/// Install diagnostics, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    if let Err(err) = diagnostics::install() {
        web_sys::console::error_1(&format!("diagnostic relay not installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
