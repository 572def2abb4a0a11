//! Wall clock access. Browser time under `csr`, system time otherwise.

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Offset of local time from UTC, in minutes (UTC-5 is `-300`).
pub fn utc_offset_minutes() -> i32 {
    #[cfg(feature = "csr")]
    {
        // getTimezoneOffset is UTC minus local.
        #[allow(clippy::cast_possible_truncation)]
        let offset = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        offset
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
