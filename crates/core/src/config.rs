//! Dashboard configuration.
//!
//! Values arrive as optional strings (build-time environment in the UI) and
//! are validated here so parsing stays testable natively.

use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::result::{Result, ResultExt};

pub const API_BASE_KEY: &str = "INTERVU_API_BASE";
pub const POLL_SECS_KEY: &str = "INTERVU_POLL_SECS";
pub const LOG_LEVEL_KEY: &str = "INTERVU_LOG_LEVEL";

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_POLL_SECS: u64 = 30;

/// Backend endpoints, relative to the API base.
pub mod endpoints {
    pub const CURRENT_USER: &str = "/users/me";
    pub const MY_INTERVIEWS: &str = "/interviews/mine";
}

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without trailing slash, absolute or root-relative
    pub api_base_url: String,
    /// Interval between interview refreshes; `None` disables polling
    pub poll_interval: Option<Duration>,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            poll_interval: Some(Duration::from_secs(DEFAULT_POLL_SECS)),
            log_level: log::Level::Info,
        }
    }
}

impl Config {
    /// Build a config from raw values, failing on the first invalid one.
    ///
    /// Absent values take their defaults.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` naming the offending key.
    pub fn from_values(
        api_base: Option<&str>,
        poll_secs: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_base_url: api_base
                .map(parse_api_base)
                .transpose()?
                .unwrap_or(defaults.api_base_url),
            poll_interval: poll_secs
                .map(parse_poll_interval)
                .transpose()?
                .unwrap_or(defaults.poll_interval),
            log_level: log_level
                .map(parse_log_level)
                .transpose()?
                .unwrap_or(defaults.log_level),
        })
    }

    /// Like [`Config::from_values`], but an invalid value falls back to its
    /// default with a warning instead of failing the whole config.
    #[must_use]
    pub fn from_values_lenient(
        api_base: Option<&str>,
        poll_secs: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base
                .and_then(|v| parse_api_base(v).into_option_logged())
                .unwrap_or(defaults.api_base_url),
            poll_interval: poll_secs
                .and_then(|v| parse_poll_interval(v).into_option_logged())
                .unwrap_or(defaults.poll_interval),
            log_level: log_level
                .and_then(|v| parse_log_level(v).into_option_logged())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Full URL of a backend endpoint.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn parse_api_base(value: &str) -> Result<String> {
    let trimmed = value.trim().trim_end_matches('/');
    let is_absolute = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if trimmed.is_empty() && value.trim().starts_with('/') {
        // "/" alone means the site root
        return Ok(String::new());
    }
    if is_absolute || trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Err(Error::invalid_config(
            API_BASE_KEY,
            format!("'{value}' must start with '/', 'http://' or 'https://'"),
        ))
    }
}

fn parse_poll_interval(value: &str) -> Result<Option<Duration>> {
    u64::from_str(value.trim())
        .map(|secs| (secs > 0).then(|| Duration::from_secs(secs)))
        .map_err(|e| Error::invalid_config(POLL_SECS_KEY, format!("'{value}': {e}")))
}

fn parse_log_level(value: &str) -> Result<log::Level> {
    log::Level::from_str(value.trim())
        .map_err(|_| Error::invalid_config(LOG_LEVEL_KEY, format!("unknown level '{value}'")))
}
