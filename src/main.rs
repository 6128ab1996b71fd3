//! Now Playing Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod images;
mod models;
mod pager;
mod pages;
mod query;
mod store;

use app::App;
use config::CatalogConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = CatalogConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[App] Logger not installed: {}", e).into());
    }
    log::info!("[App] Starting, catalog at {}", config.api_base);
    if config.api_key.is_none() {
        log::warn!("[App] TMDB_API_KEY was not set at build time; lists will not load");
    }

    mount_to_body(move || view! { <App config=config /> });
}
