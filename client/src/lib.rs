//! # client
//!
//! Leptos front end for the ScooterPro repair-shop dashboard.
//!
//! Pages, components, page-local state, and the simulated loading delays
//! live here. Domain data and rules come from the `shop` crate; this crate
//! only renders them and wires user input back into them.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
