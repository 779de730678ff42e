//! Schedule page component

use leptos::prelude::*;

/// Schedule page, reached from the "Schedule" quick action
#[component]
pub fn Schedule() -> impl IntoView {
    view! {
        <div class="schedule-page">
            <h1>"Schedule"</h1>
            <p>"Plan upcoming interviews"</p>
            <div class="schedule-content">
                <p>"Interview scheduling is managed by the scheduling service."</p>
            </div>
        </div>
    }
}
