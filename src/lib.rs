//! # careercraft
//!
//! Leptos + WASM client for the CareerCraft landing, dashboard and history
//! pages.
//!
//! The pages share one piece of state: a few string entries in the browser's
//! `localStorage` (the visitor's name and session flags), owned by
//! [`store::Prefs`]. Page behaviors live in [`flow`] as plain functions over
//! injected store, navigation and notice capabilities; [`pages`] renders the
//! controls and wires them to those functions.

pub mod app;
pub mod config;
pub mod flow;
pub mod nav;
pub mod notice;
pub mod pages;
pub mod store;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::{App, Services};

    let config = config::SiteConfig::from_build_env();
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);

    let services = Services::browser(config);
    leptos::mount::mount_to_body(move || view! { <App services=services/> });
    log::info!("careercraft client initialized");
}
