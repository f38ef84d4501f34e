mod api;
mod app;
mod auth;
mod charts;
mod components;
mod config;
mod error;
mod format;
mod forms;
mod ledger;
mod models;
mod pages;
mod route;
mod storage;

use crate::config::config;

fn main() {
    console_error_panic_hook::set_once();
    let settings = config();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));
    log::info!("finance frontend starting against {}", settings.api_base);
    yew::Renderer::<app::App>::new().render();
}
