//! Interview records and meeting status.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Default meeting length when a record has no end time.
pub const DEFAULT_MEETING_MS: i64 = 60 * 60 * 1000;

/// Stored statuses that always mean the meeting is over.
const FINISHED_STATUSES: [&str; 3] = ["completed", "succeeded", "failed"];

/// A scheduled interview as returned by the backend.
///
/// Only the identifier is required; everything else defaults when absent
/// and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Epoch milliseconds
    #[serde(default, deserialize_with = "epoch_ms::deserialize")]
    pub start_time: i64,
    #[serde(default, deserialize_with = "epoch_ms::deserialize_option")]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stream_call_id: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub interviewer_ids: Vec<String>,
}

impl Interview {
    /// Creates a new interview with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start_time: 0,
            end_time: None,
            status: None,
            stream_call_id: None,
            candidate_id: None,
            interviewer_ids: Vec::new(),
        }
    }

    /// Builder pattern: set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder pattern: set start and optional end time (epoch ms)
    #[must_use]
    pub fn with_schedule(mut self, start_time: i64, end_time: Option<i64>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Builder pattern: set stored status
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Builder pattern: set video call id
    #[must_use]
    pub fn with_stream_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.stream_call_id = Some(call_id.into());
        self
    }

    /// Meeting id used to join the call; falls back to the record id.
    #[must_use]
    pub fn call_id(&self) -> &str {
        self.stream_call_id.as_deref().unwrap_or(&self.id)
    }

    /// End of the meeting window in epoch ms.
    #[must_use]
    pub fn effective_end_time(&self) -> i64 {
        self.end_time
            .unwrap_or_else(|| self.start_time.saturating_add(DEFAULT_MEETING_MS))
    }

    /// Derive the meeting status at `now_ms`.
    #[must_use]
    pub fn meeting_status(&self, now_ms: i64) -> MeetingStatus {
        let finished = self
            .status
            .as_deref()
            .is_some_and(|s| FINISHED_STATUSES.contains(&s));

        if finished {
            MeetingStatus::Completed
        } else if now_ms < self.start_time {
            MeetingStatus::Upcoming
        } else if now_ms < self.effective_end_time() {
            MeetingStatus::Live
        } else {
            MeetingStatus::Completed
        }
    }

    /// Start time rendered like "Monday, March 3 · 2:30 PM" in the given offset.
    ///
    /// `utc_offset_minutes` is east of UTC. Returns `None` for out-of-range
    /// timestamps or offsets.
    #[must_use]
    pub fn formatted_start(&self, utc_offset_minutes: i32) -> Option<String> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)?;
        DateTime::from_timestamp_millis(self.start_time).map(|utc| {
            utc.with_timezone(&offset)
                .format("%A, %B %-d · %-I:%M %p")
                .to_string()
        })
    }
}

/// Timestamps arrive as JSON numbers that may carry a fraction or an
/// exponent (`1.7e12`). Whole milliseconds are kept.
mod epoch_ms {
    use serde::{Deserialize, Deserializer};

    // Exclusive bounds: i64::MAX rounds up to 2^63 as an f64.
    const MIN: f64 = -9_223_372_036_854_775_808.0;
    const MAX: f64 = 9_223_372_036_854_775_808.0;

    #[allow(clippy::cast_possible_truncation)]
    fn to_millis<E: serde::de::Error>(value: f64) -> Result<i64, E> {
        let whole = value.trunc();
        if whole.is_finite() && whole >= MIN && whole < MAX {
            Ok(whole as i64)
        } else {
            Err(E::custom(format!("timestamp {value} is out of range")))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        f64::deserialize(deserializer).and_then(to_millis)
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(to_millis::<D::Error>)
            .transpose()
    }

}

/// Meeting status shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Upcoming,
    Live,
    Completed,
}

impl MeetingStatus {
    /// Returns the badge label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Live Now",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier for the badge
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Upcoming => "status-upcoming",
            Self::Live => "status-live",
            Self::Completed => "status-completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000_000;

    #[test]
    fn test_interview_creation() {
        let interview = Interview::new("int-1", "Backend loop");
        assert_eq!(interview.id, "int-1");
        assert_eq!(interview.title, "Backend loop");
        assert_eq!(interview.description, None);
        assert!(interview.interviewer_ids.is_empty());
    }

    #[test]
    fn test_call_id_falls_back_to_id() {
        let plain = Interview::new("int-1", "A");
        assert_eq!(plain.call_id(), "int-1");

        let with_call = Interview::new("int-2", "B").with_stream_call_id("call-9");
        assert_eq!(with_call.call_id(), "call-9");
    }

    #[test]
    fn test_status_before_during_after() {
        let interview = Interview::new("int-1", "A").with_schedule(START, None);
        assert_eq!(interview.meeting_status(START - 1), MeetingStatus::Upcoming);
        assert_eq!(interview.meeting_status(START), MeetingStatus::Live);
        assert_eq!(
            interview.meeting_status(START + DEFAULT_MEETING_MS - 1),
            MeetingStatus::Live
        );
        assert_eq!(
            interview.meeting_status(START + DEFAULT_MEETING_MS),
            MeetingStatus::Completed
        );
    }

    #[test]
    fn test_explicit_end_time_is_respected() {
        let interview = Interview::new("int-1", "A").with_schedule(START, Some(START + 1_000));
        assert_eq!(interview.meeting_status(START + 999), MeetingStatus::Live);
        assert_eq!(interview.meeting_status(START + 1_000), MeetingStatus::Completed);
    }

    #[test]
    fn test_finished_status_overrides_time() {
        for status in ["completed", "succeeded", "failed"] {
            let interview = Interview::new("int-1", "A")
                .with_schedule(START, None)
                .with_status(status);
            assert_eq!(interview.meeting_status(START - 10), MeetingStatus::Completed);
        }

        let scheduled = Interview::new("int-1", "A")
            .with_schedule(START, None)
            .with_status("upcoming");
        assert_eq!(scheduled.meeting_status(START - 10), MeetingStatus::Upcoming);
    }

    #[test]
    fn test_formatted_start() {
        // 2023-11-14T22:13:20Z
        let interview = Interview::new("int-1", "A").with_schedule(START, None);
        assert_eq!(
            interview.formatted_start(0).as_deref(),
            Some("Tuesday, November 14 · 10:13 PM")
        );
        assert_eq!(
            interview.formatted_start(120).as_deref(),
            Some("Wednesday, November 15 · 12:13 AM")
        );
        assert_eq!(interview.formatted_start(i32::MAX), None);
    }

    #[test]
    fn test_deserialization() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{
            "_id": "j57a",
            "_creationTime": 1700000000000.5,
            "title": "System design",
            "description": "Design a rate limiter",
            "startTime": 1700000000000,
            "status": "upcoming",
            "streamCallId": "c-1",
            "candidateId": "user_2",
            "interviewerIds": ["user_1"]
        }"#;

        let interview: Interview = serde_json::from_str(json)?;
        assert_eq!(interview.id, "j57a");
        assert_eq!(interview.start_time, START);
        assert_eq!(interview.call_id(), "c-1");
        assert_eq!(interview.interviewer_ids, vec!["user_1".to_string()]);
        Ok(())
    }

    #[test]
    fn test_deserialization_requires_only_id() -> Result<(), Box<dyn std::error::Error>> {
        let interview: Interview = serde_json::from_str(r#"{"_id":"x"}"#)?;
        assert_eq!(interview, Interview::new("x", ""));
        assert!(serde_json::from_str::<Interview>(r#"{"title":"no id"}"#).is_err());
        Ok(())
    }

    #[test]
    fn test_deserialization_accepts_float_timestamps() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"_id":"x","startTime":1.7e12,"endTime":1700000001000.9}"#;
        let interview: Interview = serde_json::from_str(json)?;
        assert_eq!(interview.start_time, START);
        assert_eq!(interview.end_time, Some(START + 1_000));

        let open_ended: Interview = serde_json::from_str(r#"{"_id":"x","endTime":null}"#)?;
        assert_eq!(open_ended.end_time, None);

        assert!(serde_json::from_str::<Interview>(r#"{"_id":"x","startTime":1e300}"#).is_err());
        assert!(serde_json::from_str::<Interview>(r#"{"_id":"x","startTime":"soon"}"#).is_err());
        Ok(())
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MeetingStatus::Live.label(), "Live Now");
        assert_eq!(MeetingStatus::Upcoming.css_class(), "status-upcoming");
    }
}
