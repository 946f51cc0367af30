//! Reporting window model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The time span a reconstruction query covers, inclusive on both ends.
///
/// The window bounds carry explicit UTC offsets like every other timestamp
/// in the engine. The window is the only time reference the engine consults;
/// ambient system time is never read, so "shift still open at end of
/// reporting window" means open at `end`, not open "now".
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportingWindow;
/// use chrono::DateTime;
///
/// let window = ReportingWindow {
///     start: DateTime::parse_from_rfc3339("2026-03-01T00:00:00+07:00").unwrap(),
///     end: DateTime::parse_from_rfc3339("2026-03-31T23:59:59+07:00").unwrap(),
/// };
/// let inside = DateTime::parse_from_rfc3339("2026-03-15T12:00:00+07:00").unwrap();
/// assert!(window.contains(inside));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// The first instant inside the window.
    pub start: DateTime<FixedOffset>,
    /// The last instant inside the window.
    pub end: DateTime<FixedOffset>,
}

impl ReportingWindow {
    /// Returns true if the instant falls within the window.
    ///
    /// An inverted window (`start > end`) contains no instants; queries
    /// against it yield empty results rather than errors.
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn march_window() -> ReportingWindow {
        ReportingWindow {
            start: ts("2026-03-01T00:00:00+07:00"),
            end: ts("2026-03-31T23:59:59+07:00"),
        }
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let window = march_window();
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
    }

    #[test]
    fn test_excludes_instants_outside() {
        let window = march_window();
        assert!(!window.contains(ts("2026-02-28T23:59:59+07:00")));
        assert!(!window.contains(ts("2026-04-01T00:00:00+07:00")));
    }

    #[test]
    fn test_comparison_respects_offsets() {
        // 23:00 UTC on March 31st is April 1st 06:00 in +07:00, which is
        // outside a window expressed in +07:00.
        let window = march_window();
        assert!(!window.contains(ts("2026-03-31T23:00:00+00:00")));
        // 16:00 UTC is 23:00 in +07:00 on the same day: inside.
        assert!(window.contains(ts("2026-03-31T16:00:00+00:00")));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let window = ReportingWindow {
            start: ts("2026-03-31T00:00:00+07:00"),
            end: ts("2026-03-01T00:00:00+07:00"),
        };
        assert!(!window.contains(ts("2026-03-15T12:00:00+07:00")));
    }

    #[test]
    fn test_window_serialization_round_trip() {
        let window = march_window();
        let json = serde_json::to_string(&window).unwrap();
        let deserialized: ReportingWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, deserialized);
    }
}
