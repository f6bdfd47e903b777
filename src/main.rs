//! Todo UI Entry Point

mod app;
mod auth;
mod components;
mod config;
mod context;
mod error;
mod graphql;
mod logger;
mod models;
mod pages;
mod routing;
mod session;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logger::init(config.log_level_filter());
    if let Some(err) = config_error {
        log::warn!("[CONFIG] using defaults: {}", err);
    }
    log::info!("[APP] starting, graphql endpoint {}", config.graphql_endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
