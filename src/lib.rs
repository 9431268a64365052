//! # sb-admin
//!
//! Leptos + WASM admin dashboard for SB GmbH. Authenticated staff manage
//! branch locations, staff accounts, and invoices through CRUD screens
//! backed by the company's REST API.
//!
//! The crate is client-side rendered only. Browser-dependent code (HTTP
//! calls, `localStorage`, navigation) is gated behind the `csr` feature so
//! the session, pagination, and payload logic can be unit tested on the
//! host target with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
