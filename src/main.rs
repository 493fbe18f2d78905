//! TaskHub Frontend Entry Point

mod app;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

/// Log level baked in at build time via `TASKHUB_LOG`
const LOG_FILTER: &str = match option_env!("TASKHUB_LOG") {
    Some(filter) => filter,
    None => "info",
};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LOG_FILTER) {
        web_sys::console::error_1(&e.to_string().into());
    }
    mount_to_body(App);
}
