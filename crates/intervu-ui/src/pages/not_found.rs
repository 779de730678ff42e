//! Fallback for unknown routes

use leptos::prelude::*;

use crate::router::routes;

/// Heading shown for an unknown route
pub const NOT_FOUND_TITLE: &str = "Nothing scheduled here";

/// Rendered by the router when no route matches
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>{NOT_FOUND_TITLE}</h1>
            <p>"This link doesn't point to an interview or a page in Intervu."</p>
            <a href={routes::HOME}>"Back to your interviews"</a>
        </div>
    }
}
