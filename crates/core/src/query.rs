//! Asynchronous query results.
//!
//! A query is always in exactly one of three states. The wire form is the
//! `{"status": ..., "data": [...]}` envelope used by the backend; data only
//! exists in the success state.

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// Status tag of a [`QueryResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Loading,
    Error,
    Success,
}

impl QueryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a remote list query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryResult<T> {
    #[default]
    Loading,
    Error,
    Success { data: Vec<T> },
}

impl<T> QueryResult<T> {
    #[must_use]
    pub const fn success(data: Vec<T>) -> Self {
        Self::Success { data }
    }

    /// Fold a completed fetch into a query result.
    ///
    /// The error cause is logged here; the result only keeps the tag.
    #[must_use]
    pub fn from_fetch(fetched: Result<Vec<T>>) -> Self {
        match fetched {
            Ok(data) => Self::Success { data },
            Err(e) => {
                log::warn!("Query failed: {e}");
                Self::Error
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> QueryStatus {
        match self {
            Self::Loading => QueryStatus::Loading,
            Self::Error => QueryStatus::Error,
            Self::Success { .. } => QueryStatus::Success,
        }
    }

    /// Records, only available on success.
    #[must_use]
    pub fn data(&self) -> Option<&[T]> {
        match self {
            Self::Success { data } => Some(data),
            Self::Loading | Self::Error => None,
        }
    }
}
