//! Character Explorer Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod notifications;
mod query;
mod store;
mod theme;
mod url_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("Starting character explorer");
    mount_to_body(App);
}
