//! Presentational components for the dashboard
//!
//! Each component is stateless apart from local form state and renders
//! purely from its props.

pub mod action_card;
pub mod interview_list;
pub mod loader;
pub mod meeting_card;
pub mod meeting_modal;

pub use action_card::ActionCard;
pub use interview_list::{CandidateInterviews, InterviewList};
pub use loader::{LoaderUI, Spinner};
pub use meeting_card::MeetingCard;
pub use meeting_modal::MeetingModal;
