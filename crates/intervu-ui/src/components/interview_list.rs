//! Candidate interview list in its loading, error, empty and loaded states

use intervu_core::InterviewListView;
use intervu_core::dashboard::{
    CANDIDATE_HEADING, CANDIDATE_HEADING_SUBTITLE, LOAD_FAILED_MESSAGE, NO_INTERVIEWS_MESSAGE,
};
use leptos::prelude::*;

use super::loader::Spinner;
use super::meeting_card::MeetingCard;

/// Renders one state of the interview list
#[component]
pub fn InterviewList(list: InterviewListView) -> impl IntoView {
    match list {
        InterviewListView::Loading => view! {
            <div class="list-status list-loading" aria-live="polite">
                <Spinner />
            </div>
        }
        .into_any(),
        InterviewListView::Error => view! {
            <div class="list-status list-error">{LOAD_FAILED_MESSAGE}</div>
        }
        .into_any(),
        InterviewListView::Empty => view! {
            <div class="list-status list-empty">{NO_INTERVIEWS_MESSAGE}</div>
        }
        .into_any(),
        InterviewListView::Cards(interviews) => view! {
            <div class="interview-grid">
                <For
                    each=move || interviews.clone()
                    key=|interview| interview.id.clone()
                    children=|interview| view! { <MeetingCard interview=interview /> }
                />
            </div>
        }
        .into_any(),
    }
}

/// Candidate section: heading plus the interview list
#[component]
pub fn CandidateInterviews(list: InterviewListView) -> impl IntoView {
    view! {
        <section class="candidate-interviews">
            <div class="section-header">
                <h1>{CANDIDATE_HEADING}</h1>
                <p class="section-subtitle">{CANDIDATE_HEADING_SUBTITLE}</p>
            </div>
            <div class="interview-list">
                <InterviewList list=list />
            </div>
        </section>
    }
}
