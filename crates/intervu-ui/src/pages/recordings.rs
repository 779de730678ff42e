//! Recordings page component

use leptos::prelude::*;

/// Recordings page, reached from the "Recordings" quick action
#[component]
pub fn Recordings() -> impl IntoView {
    view! {
        <div class="recordings-page">
            <h1>"Recordings"</h1>
            <p>"Access past interviews"</p>
            <div class="recordings-content">
                <p>"Recordings appear here once a meeting has ended."</p>
            </div>
        </div>
    }
}
