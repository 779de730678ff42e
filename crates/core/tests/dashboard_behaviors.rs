//! Behavioral tests for the home page view derivation and quick actions

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use intervu_core::dashboard::{LOAD_FAILED_MESSAGE, NO_INTERVIEWS_MESSAGE};
use intervu_core::{
    DashboardView, Interview, InterviewListView, ModalMode, ModalState, QUICK_ACTIONS,
    QueryResult, QuickActionIntent, RoleState,
};

fn three_interviews() -> Vec<Interview> {
    vec![
        Interview::new("int-a", "Frontend pairing"),
        Interview::new("int-b", "System design"),
        Interview::new("int-c", "Behavioral"),
    ]
}

fn all_queries() -> Vec<QueryResult<Interview>> {
    vec![
        QueryResult::Loading,
        QueryResult::Error,
        QueryResult::success(Vec::new()),
        QueryResult::success(three_interviews()),
    ]
}

// ============================================================================
// ROLE BRANCHING BEHAVIORS
// ============================================================================

#[test]
fn given_role_loading_when_deriving_then_only_loader_regardless_of_query() {
    for query in all_queries() {
        let view = DashboardView::derive(&RoleState::Loading, &query);
        assert_eq!(view, DashboardView::Loading);
    }
}

#[test]
fn given_interviewer_when_deriving_then_never_shows_interview_list() {
    for query in all_queries() {
        let view = DashboardView::derive(&RoleState::Interviewer, &query);
        assert_eq!(view, DashboardView::Interviewer);
        assert!(view.interview_list().is_none());
    }
}

// ============================================================================
// CANDIDATE LIST BEHAVIORS
// ============================================================================

#[test]
fn given_candidate_and_loading_query_when_deriving_then_spinner_state() {
    let view = DashboardView::derive(&RoleState::Candidate, &QueryResult::Loading);
    assert_eq!(view.interview_list(), Some(&InterviewListView::Loading));
}

#[test]
fn given_candidate_and_error_query_when_deriving_then_failure_message() {
    let view = DashboardView::derive(&RoleState::Candidate, &QueryResult::Error);
    let list = view.interview_list().expect("candidate branch");
    assert_eq!(
        list.message(),
        Some("Failed to load interviews. Please try again.")
    );
    assert_eq!(list.message(), Some(LOAD_FAILED_MESSAGE));
}

#[test]
fn given_candidate_and_empty_success_when_deriving_then_empty_message() {
    let view = DashboardView::derive(&RoleState::Candidate, &QueryResult::success(Vec::new()));
    let list = view.interview_list().expect("candidate branch");
    assert_eq!(list, &InterviewListView::Empty);
    assert_eq!(
        list.message(),
        Some("You have no scheduled interviews at the moment.")
    );
    assert_eq!(list.message(), Some(NO_INTERVIEWS_MESSAGE));
}

#[test]
fn given_candidate_and_three_records_when_deriving_then_three_cards_keyed_by_id() {
    let view = DashboardView::derive(
        &RoleState::Candidate,
        &QueryResult::success(three_interviews()),
    );
    let list = view.interview_list().expect("candidate branch");
    assert_eq!(list.card_keys(), vec!["int-a", "int-b", "int-c"]);
    assert_eq!(list.message(), None);
}

#[test]
fn given_wire_envelope_when_decoded_then_drives_the_same_view() {
    let json = r#"{"status":"success","data":[{"_id":"k1","title":"One"},{"_id":"k2"}]}"#;
    let query: QueryResult<Interview> = serde_json::from_str(json).expect("valid envelope");
    let view = DashboardView::derive(&RoleState::Candidate, &query);
    assert_eq!(
        view.interview_list().map(InterviewListView::card_keys),
        Some(vec!["k1", "k2"])
    );
}

// ============================================================================
// QUICK ACTION BEHAVIORS
// ============================================================================

#[test]
fn given_new_call_when_resolved_then_opens_start_modal() {
    assert_eq!(
        QuickActionIntent::for_title("New Call"),
        QuickActionIntent::OpenModal(ModalMode::Start)
    );
    let modal = ModalState::open(ModalMode::Start);
    assert_eq!(modal.title(), "Start Meeting");
    assert!(!modal.is_join());
}

#[test]
fn given_join_interview_when_resolved_then_opens_join_modal() {
    assert_eq!(
        QuickActionIntent::for_title("Join Interview"),
        QuickActionIntent::OpenModal(ModalMode::Join)
    );
    let modal = ModalState::open(ModalMode::Join);
    assert_eq!(modal.title(), "Join Meeting");
    assert!(modal.is_join());
}

#[test]
fn given_other_actions_when_resolved_then_navigate_to_lowercase_title() {
    for action in QUICK_ACTIONS
        .iter()
        .filter(|a| a.title != "New Call" && a.title != "Join Interview")
    {
        assert_eq!(
            QuickActionIntent::for_title(action.title),
            QuickActionIntent::Navigate(format!("/{}", action.title.to_lowercase()))
        );
    }
}
