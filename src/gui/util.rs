//! Small pure helpers used by the GUI.
//! - no UI widgets or state mutation

/// Seconds -> "m:ss". Negative and non-finite input shows as 0:00.
pub(crate) fn fmt_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let m = total / 60;
    let s = total % 60;
    format!("{m}:{s:02}")
}
