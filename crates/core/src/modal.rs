//! Meeting modal state and meeting link parsing.

use crate::error::Error;
use crate::result::Result;

pub const START_MEETING_TITLE: &str = "Start Meeting";
pub const JOIN_MEETING_TITLE: &str = "Join Meeting";

/// Which flow the meeting modal runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Start,
    Join,
}

/// Open/closed state of the meeting modal.
///
/// An open modal always carries its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalMode),
}

impl ModalState {
    #[must_use]
    pub const fn open(mode: ModalMode) -> Self {
        Self::Open(mode)
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn mode(self) -> Option<ModalMode> {
        match self {
            Self::Open(mode) => Some(mode),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_join(self) -> bool {
        matches!(self, Self::Open(ModalMode::Join))
    }

    /// Modal heading; anything but join mode reads as starting a meeting.
    #[must_use]
    pub const fn title(self) -> &'static str {
        if self.is_join() {
            JOIN_MEETING_TITLE
        } else {
            START_MEETING_TITLE
        }
    }
}

/// Extract the meeting id from a pasted meeting link.
///
/// The id is the last non-empty path segment, ignoring any query string or
/// fragment. For absolute links the scheme and host are never part of the
/// path. A bare id is accepted as-is.
///
/// # Errors
/// Returns `Error::InvalidMeetingLink` if the link is blank or has no usable
/// segment.
pub fn meeting_id_from_link(link: &str) -> Result<String> {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_meeting_link(link, "link is empty"));
    }

    let without_suffix = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let path = match without_suffix.split_once("://") {
        Some((_, after_scheme)) => after_scheme
            .split_once('/')
            .map_or("", |(_, path)| path),
        None => without_suffix,
    };

    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .filter(|segment| !segment.contains(':'))
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_meeting_link(link, "no meeting id found"))
}

/// Client-side path of a meeting room.
#[must_use]
pub fn meeting_path(meeting_id: &str) -> String {
    format!("/meeting/{meeting_id}")
}
