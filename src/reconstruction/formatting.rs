//! Duration formatting for the reporting layer.

/// Formats a minute count as a human-readable duration string.
///
/// Durations under an hour render as `"45m"`; anything longer renders as
/// `"8h 30m"`. Multi-day counts keep accumulating hours (`"25h 5m"`).
/// Negative input clamps to zero, keeping the function total.
///
/// # Examples
///
/// ```
/// use attendance_engine::reconstruction::format_duration;
///
/// assert_eq!(format_duration(0), "0m");
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(510), "8h 30m");
/// assert_eq!(format_duration(1505), "25h 5m");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let remainder = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, remainder)
    } else {
        format!("{}m", remainder)
    }
}
