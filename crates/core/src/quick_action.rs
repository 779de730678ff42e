//! Quick actions offered to interviewers on the dashboard.

use crate::modal::ModalMode;

/// Title of the action that starts an instant meeting.
pub const NEW_CALL: &str = "New Call";
/// Title of the action that joins a meeting by link.
pub const JOIN_INTERVIEW: &str = "Join Interview";

/// Accent used by an action card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionColor {
    Primary,
    Purple,
    Blue,
    Orange,
}

impl ActionColor {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "action-primary",
            Self::Purple => "action-purple",
            Self::Blue => "action-blue",
            Self::Orange => "action-orange",
        }
    }
}

/// A labeled dashboard button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    /// Glyph rendered in the card's icon slot
    pub icon: &'static str,
    pub color: ActionColor,
}

/// The fixed catalog of quick actions, in display order.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: NEW_CALL,
        description: "Start an instant call",
        icon: "</>",
        color: ActionColor::Primary,
    },
    QuickAction {
        title: JOIN_INTERVIEW,
        description: "Enter via invitation link",
        icon: "👥",
        color: ActionColor::Purple,
    },
    QuickAction {
        title: "Schedule",
        description: "Plan upcoming interviews",
        icon: "📅",
        color: ActionColor::Blue,
    },
    QuickAction {
        title: "Recordings",
        description: "Access past interviews",
        icon: "🎥",
        color: ActionColor::Orange,
    },
];

/// What clicking a quick action does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickActionIntent {
    /// Open the meeting modal in the given mode
    OpenModal(ModalMode),
    /// Navigate to a client-side path
    Navigate(String),
}

impl QuickActionIntent {
    /// Map an action title to its intent.
    ///
    /// Titles other than the two meeting actions navigate to
    /// `/<lowercased title>`.
    #[must_use]
    pub fn for_title(title: &str) -> Self {
        let intent = match title {
            NEW_CALL => Self::OpenModal(ModalMode::Start),
            JOIN_INTERVIEW => Self::OpenModal(ModalMode::Join),
            other => Self::Navigate(format!("/{}", other.to_lowercase())),
        };
        log::debug!("Quick action '{title}' resolved to {intent:?}");
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_actions_open_modal() {
        assert_eq!(
            QuickActionIntent::for_title("New Call"),
            QuickActionIntent::OpenModal(ModalMode::Start)
        );
        assert_eq!(
            QuickActionIntent::for_title("Join Interview"),
            QuickActionIntent::OpenModal(ModalMode::Join)
        );
    }

    #[test]
    fn test_other_actions_navigate_lowercased() {
        assert_eq!(
            QuickActionIntent::for_title("Schedule"),
            QuickActionIntent::Navigate("/schedule".to_string())
        );
        assert_eq!(
            QuickActionIntent::for_title("Recordings"),
            QuickActionIntent::Navigate("/recordings".to_string())
        );
    }

    #[test]
    fn test_title_match_is_exact() {
        assert_eq!(
            QuickActionIntent::for_title("new call"),
            QuickActionIntent::Navigate("/new call".to_string())
        );
    }

    #[test]
    fn test_catalog_titles_unique() {
        let titles: std::collections::HashSet<_> = QUICK_ACTIONS.iter().map(|a| a.title).collect();
        assert_eq!(titles.len(), QUICK_ACTIONS.len());
    }
}
