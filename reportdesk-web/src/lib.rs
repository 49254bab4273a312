//! Leptos CSR front-end for reportdesk.
//!
//! The interaction rules live in `reportdesk-core`; this crate wires them to
//! the DOM, the auth backend and the browser console.
//!
//! Developed by the Reportdesk Team (c)2025

pub mod api;
pub mod components;
pub mod hooks;
pub mod logging;

use leptos::prelude::*;
use reportdesk_core::AppConfig;
use reportdesk_core::report::{ReportItem, default_catalog, parse_catalog};
use tracing::{info, warn};

pub use components::App;

/// Element id of the optional JSON config blob in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "reportdesk-config";
/// Element id of the optional JSON report catalog in `index.html`.
pub const CATALOG_ELEMENT_ID: &str = "reportdesk-catalog";

/// Boot the app: panic hook, config, logging, then mount.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match json_blob(CONFIG_ELEMENT_ID) {
        None => (AppConfig::default(), None),
        Some(json) => match AppConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
    };

    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("falling back to default config: {e}");
    }
    info!(
        api_url = %config.api_url,
        "Starting reportdesk-web v{}",
        env!("CARGO_PKG_VERSION")
    );

    let catalog = load_catalog();
    leptos::mount::mount_to_body(move || view! { <App config=config catalog=catalog /> });
}

/// Catalog from the page, or the built-in one when absent or unreadable.
fn load_catalog() -> Vec<ReportItem> {
    let Some(json) = json_blob(CATALOG_ELEMENT_ID) else {
        return default_catalog();
    };
    match parse_catalog(&json) {
        Ok(items) => {
            info!(reports = items.len(), "loaded report catalog from page");
            items
        }
        Err(e) => {
            warn!("ignoring unreadable report catalog: {e}");
            default_catalog()
        }
    }
}

/// Text of `<script id="{id}" type="application/json">`, if present and non-blank.
fn json_blob(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
