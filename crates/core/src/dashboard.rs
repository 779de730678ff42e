//! Dashboard view derivation.
//!
//! The home page renders strictly from a [`DashboardView`], derived from
//! the viewer's role and the interview query. Keeping this pure lets the
//! branching be checked without a DOM.

use crate::interview::Interview;
use crate::query::QueryResult;
use crate::role::RoleState;

pub const WELCOME_TITLE: &str = "Welcome back!";
pub const INTERVIEWER_SUBTITLE: &str = "Manage your interviews and review candidates effectively.";
pub const CANDIDATE_SUBTITLE: &str = "Access your upcoming interviews and preparations.";
pub const CANDIDATE_HEADING: &str = "Your Interviews";
pub const CANDIDATE_HEADING_SUBTITLE: &str = "View and join your scheduled interviews.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load interviews. Please try again.";
pub const NO_INTERVIEWS_MESSAGE: &str = "You have no scheduled interviews at the moment.";

/// Candidate-side rendering of the interview query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewListView {
    Loading,
    Error,
    Empty,
    Cards(Vec<Interview>),
}

impl InterviewListView {
    #[must_use]
    pub fn from_query(query: &QueryResult<Interview>) -> Self {
        match query {
            QueryResult::Loading => Self::Loading,
            QueryResult::Error => Self::Error,
            QueryResult::Success { data } if data.is_empty() => Self::Empty,
            QueryResult::Success { data } => Self::Cards(data.clone()),
        }
    }

    /// Static message for the non-card states.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Error => Some(LOAD_FAILED_MESSAGE),
            Self::Empty => Some(NO_INTERVIEWS_MESSAGE),
            Self::Loading | Self::Cards(_) => None,
        }
    }

    /// Identifiers of the cards to render, in order.
    #[must_use]
    pub fn card_keys(&self) -> Vec<&str> {
        match self {
            Self::Cards(interviews) => interviews.iter().map(|i| i.id.as_str()).collect(),
            Self::Loading | Self::Error | Self::Empty => Vec::new(),
        }
    }
}

/// Top-level view of the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Role still resolving: only the loader is shown
    Loading,
    /// Quick actions and the meeting modal
    Interviewer,
    /// Interview list in one of its states
    Candidate(InterviewListView),
}

impl DashboardView {
    #[must_use]
    pub fn derive(role: &RoleState, query: &QueryResult<Interview>) -> Self {
        if role.is_loading() {
            Self::Loading
        } else if role.is_interviewer() {
            Self::Interviewer
        } else {
            Self::Candidate(InterviewListView::from_query(query))
        }
    }

    /// The candidate list view, if this is the candidate branch.
    #[must_use]
    pub const fn interview_list(&self) -> Option<&InterviewListView> {
        match self {
            Self::Candidate(list) => Some(list),
            Self::Loading | Self::Interviewer => None,
        }
    }
}
