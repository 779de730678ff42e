//! Browser clock helpers
//!
//! Native builds (tests) fall back to the system clock in UTC.

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Local offset from UTC in minutes, east positive.
#[must_use]
pub fn local_utc_offset_minutes() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        // getTimezoneOffset is minutes *west* of UTC
        -(js_sys::Date::new_0().get_timezone_offset() as i32)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}
