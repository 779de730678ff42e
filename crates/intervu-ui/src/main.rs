//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It installs logging and mounts the App component to the document body.

use intervu_ui::{App, config};
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    // Accept everything until the configured level is known
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = config::load();
    log::set_max_level(config.log_level.to_level_filter());

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    })
}
