//! RentIt Frontend Entry Point

mod config;
mod models;
mod commands;
mod routes;
mod session;
mod context;
mod store;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("RentIt", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
