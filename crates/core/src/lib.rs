//! Intervu core: domain types and pure view logic for the interview dashboard.
//!
//! Nothing here touches the DOM or the network, so the dashboard's branching
//! (role, query status, quick actions, modal) is tested natively.
//!
//! ## Module Structure
//! - `role`: viewer role resolution
//! - `query`: loading/error/success query results
//! - `interview`: interview records and meeting status
//! - `quick_action`: quick action catalog and click intents
//! - `modal`: meeting modal state and link parsing
//! - `dashboard`: view derivation for the home page
//! - `config`: validated runtime configuration
//! - `error` / `result`: error type and Railway-Oriented helpers

#![forbid(unsafe_code)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod interview;
pub mod modal;
pub mod query;
pub mod quick_action;
pub mod result;
pub mod role;

pub use config::Config;
pub use dashboard::{DashboardView, InterviewListView};
pub use error::Error;
pub use interview::{Interview, MeetingStatus};
pub use modal::{ModalMode, ModalState};
pub use query::{QueryResult, QueryStatus};
pub use quick_action::{QUICK_ACTIONS, QuickAction, QuickActionIntent};
pub use result::{Result, ResultExt};
pub use role::{Role, RoleState, UserProfile};
