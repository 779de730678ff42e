//! Viewer role resolution.

use serde::{Deserialize, Serialize};

/// Roles a user record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interviewer,
    Candidate,
}

/// User profile as returned by the backend.
///
/// Only the role is read; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// The stored role, if it is one the dashboard knows.
    #[must_use]
    pub fn known_role(&self) -> Option<Role> {
        match self.role.as_deref()? {
            "interviewer" => Some(Role::Interviewer),
            "candidate" => Some(Role::Candidate),
            _ => None,
        }
    }
}

/// Role of the current viewer, resolved asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleState {
    /// Role has not been resolved yet
    #[default]
    Loading,
    Interviewer,
    Candidate,
    /// Resolved, but the user has no recognised role (or no profile)
    Unassigned,
}

impl RoleState {
    /// Resolve the role from a fetched profile. `None` means no profile exists.
    #[must_use]
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        profile
            .and_then(UserProfile::known_role)
            .map_or(Self::Unassigned, Self::from)
    }

    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_interviewer(self) -> bool {
        matches!(self, Self::Interviewer)
    }

    #[must_use]
    pub const fn is_candidate(self) -> bool {
        matches!(self, Self::Candidate)
    }
}

impl From<Role> for RoleState {
    fn from(role: Role) -> Self {
        match role {
            Role::Interviewer => Self::Interviewer,
            Role::Candidate => Self::Candidate,
        }
    }
}
