//! Build-time configuration
//!
//! Values come from `INTERVU_API_BASE`, `INTERVU_POLL_SECS` and
//! `INTERVU_LOG_LEVEL` at compile time (Trunk passes the environment
//! through). Invalid values fall back to defaults with a warning.

use intervu_core::Config;

/// Load the dashboard configuration baked into this build.
#[must_use]
pub fn load() -> Config {
    Config::from_values_lenient(
        option_env!("INTERVU_API_BASE"),
        option_env!("INTERVU_POLL_SECS"),
        option_env!("INTERVU_LOG_LEVEL"),
    )
}
