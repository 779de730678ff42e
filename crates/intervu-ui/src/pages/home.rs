//! Home page: the interview dashboard
//!
//! Interviewers get quick actions and the meeting modal; everyone else gets
//! their interview list. Nothing renders but the loader until the role is
//! known.

use intervu_core::dashboard::{CANDIDATE_SUBTITLE, INTERVIEWER_SUBTITLE, WELCOME_TITLE};
use intervu_core::{DashboardView, ModalState, QUICK_ACTIONS, QuickActionIntent};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::{ActionCard, CandidateInterviews, LoaderUI, MeetingModal};
use crate::state::use_dashboard_sources;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let sources = use_dashboard_sources();
    let navigate = use_navigate();
    let modal = RwSignal::new(ModalState::Closed);

    // Only changes in the derived view re-render the page
    let dashboard = Memo::new(move |_| sources.current_view());

    let handle_quick_action = move |title: &'static str| match QuickActionIntent::for_title(title) {
        QuickActionIntent::OpenModal(mode) => modal.set(ModalState::open(mode)),
        QuickActionIntent::Navigate(path) => navigate(&path, NavigateOptions::default()),
    };

    move || match dashboard.get() {
        DashboardView::Loading => view! { <LoaderUI /> }.into_any(),
        DashboardView::Interviewer => {
            let on_action = handle_quick_action.clone();
            view! {
                <WelcomeLayout subtitle=INTERVIEWER_SUBTITLE>
                    <InterviewerActions on_action=on_action modal=modal />
                </WelcomeLayout>
            }
            .into_any()
        }
        DashboardView::Candidate(list) => view! {
            <WelcomeLayout subtitle=CANDIDATE_SUBTITLE>
                <CandidateInterviews list=list />
            </WelcomeLayout>
        }
        .into_any(),
    }
}

/// Welcome panel above the role-specific body
#[component]
fn WelcomeLayout(subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="welcome-panel">
                <h1 class="welcome-title">{WELCOME_TITLE}</h1>
                <p class="welcome-subtitle">{subtitle}</p>
            </section>
            {children()}
        </div>
    }
}

/// Quick action grid plus the meeting modal it controls
#[component]
fn InterviewerActions<F>(on_action: F, modal: RwSignal<ModalState>) -> impl IntoView
where
    F: Fn(&'static str) + Clone + Send + Sync + 'static,
{
    let cards = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let on_action = on_action.clone();
            let title = action.title;
            view! { <ActionCard action=*action on_click=move || on_action(title) /> }
        })
        .collect_view();

    view! {
        <div class="quick-actions">{cards}</div>
        <MeetingModal
            is_open=Signal::derive(move || modal.get().is_open())
            title=Signal::derive(move || modal.get().title())
            is_join_meeting=Signal::derive(move || modal.get().is_join())
            on_close=move || modal.set(ModalState::Closed)
        />
    }
}
