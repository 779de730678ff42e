//! Main application component
//!
//! This module provides the root App component that sets up the data
//! sources, routing and the overall application structure.

use intervu_core::Config;
use leptos::prelude::*;

use crate::router::{AppRouter, routes};
use crate::state::init_sources;

/// Main application component with router integration
///
/// Role resolution and the interview subscription start on mount and are
/// provided to pages through context.
#[component]
pub fn App(config: Config) -> impl IntoView {
    log::info!("Starting Intervu against {}", config.api_base_url);
    let sources = init_sources(&config);
    provide_context(sources);

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Intervu"</h1>
                <nav class="app-nav">
                    <a href={routes::HOME}>"Dashboard"</a>
                    <a href={routes::SCHEDULE}>"Schedule"</a>
                    <a href={routes::RECORDINGS}>"Recordings"</a>
                </nav>
            </header>
            <main class="app-main">
                <AppRouter />
            </main>
            <footer class="app-footer">
                <p>"Intervu - schedule and join interviews"</p>
            </footer>
        </div>
    }
}
