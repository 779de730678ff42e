//! Card for a single scheduled interview

use intervu_core::modal::meeting_path;
use intervu_core::{Interview, MeetingStatus};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::utils::{local_utc_offset_minutes, now_ms};

/// Interview card with schedule, status badge and join button
///
/// The status is computed once when the card renders.
#[component]
pub fn MeetingCard(interview: Interview) -> impl IntoView {
    let navigate = use_navigate();
    let status = interview.meeting_status(now_ms());
    let starts_at = interview
        .formatted_start(local_utc_offset_minutes())
        .unwrap_or_default();
    let path = meeting_path(interview.call_id());

    let join_button = (status == MeetingStatus::Live).then(|| {
        view! {
            <button
                class="btn-primary meeting-join"
                on:click=move |_| navigate(&path, NavigateOptions::default())
            >
                "Join Meeting"
            </button>
        }
    });
    let waiting_button = (status == MeetingStatus::Upcoming).then(|| {
        view! {
            <button class="btn-secondary meeting-waiting" disabled=true>
                "Waiting to Start"
            </button>
        }
    });

    view! {
        <article class="meeting-card" data-interview-id=interview.id.clone()>
            <header class="meeting-card-header">
                <span class="meeting-time">{starts_at}</span>
                <span class=format!("meeting-status {}", status.css_class())>
                    {status.label()}
                </span>
            </header>
            <h3 class="meeting-title">{interview.title.clone()}</h3>
            {interview
                .description
                .clone()
                .map(|description| view! { <p class="meeting-description">{description}</p> })}
            {join_button}
            {waiting_button}
        </article>
    }
}
