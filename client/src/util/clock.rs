//! Millisecond wall clock and timer delay math.
//!
//! The `sitekit` state machines take `now_ms` explicitly; this is the only
//! place the client reads real time.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Whole milliseconds from `now_ms` until `deadline_ms`, for a browser timeout.
///
/// Rounds up so the timer never fires before the deadline. Past deadlines
/// yield zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delay_until(deadline_ms: f64, now_ms: f64) -> u32 {
    let delay = (deadline_ms - now_ms).ceil();
    if delay.is_nan() || delay <= 0.0 {
        return 0;
    }
    delay.min(f64::from(u32::MAX)) as u32
}
