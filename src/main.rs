//! Items Page Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod models;
mod store;
mod validation;

use app::App;
use config::PageConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = PageConfig::from_build_env();
    // Only fails if a logger is already installed
    let _ = console_logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
