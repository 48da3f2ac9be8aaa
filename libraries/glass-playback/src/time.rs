//! Time labels and progress math
//!
//! The primitive reports NaN for the duration until metadata arrives, so every
//! helper here is total over `f64` and falls back to zero.

/// Placeholder shown for unknown or invalid times
pub const ZERO_TIME_LABEL: &str = "0:00";

/// Format seconds as `m:ss`
///
/// NaN and infinite inputs yield `0:00`; negative inputs are treated as zero.
///
/// ```
/// use glass_playback::format_time;
///
/// assert_eq!(format_time(125.0), "2:05");
/// assert_eq!(format_time(59.9), "0:59");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return ZERO_TIME_LABEL.to_string();
    }

    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}

/// Percentage of `duration` reached at `current`, in `[0, 100]`
///
/// Returns 0 while the duration is unknown.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }

    (current / duration * 100.0).clamp(0.0, 100.0)
}
