//! Core error types for Intervu operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for Intervu operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid config value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    // Meeting errors
    #[error("invalid meeting link '{link}': {reason}")]
    InvalidMeetingLink { link: String, reason: String },

    // Backend errors
    #[error("request to '{url}' failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("network error while requesting '{url}': {reason}")]
    Network { url: String, reason: String },

    #[error("failed to decode response from '{url}': {reason}")]
    Decode { url: String, reason: String },
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid meeting link error.
    pub fn invalid_meeting_link(link: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMeetingLink {
            link: link.into(),
            reason: reason.into(),
        }
    }

    /// Create an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a network error.
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from talking to the backend.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. } | Self::Network { .. } | Self::Decode { .. }
        )
    }
}
