//! Loading indicators

use leptos::prelude::*;

/// Inline spinner, announced as a status to assistive tech
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span class="spinner" role="status" aria-label="Loading"></span>
    }
}

/// Full-height loader shown while the page cannot render yet
#[component]
pub fn LoaderUI() -> impl IntoView {
    view! {
        <div class="loader-ui">
            <Spinner />
        </div>
    }
}
