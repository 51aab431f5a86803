//! Todo & Chat Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod forms;
mod models;
mod store;
mod sync;
mod tracker;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("todo-chat") {
        web_sys::console::warn_1(&e.to_string().into());
    }

    match ApiConfig::from_env() {
        Ok(config) => {
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid TODO_API_URL");
            mount_to_body(move || view! { <div class="error-banner">{format!("Cannot start: {}", e)}</div> });
        }
    }
}
