//! Report assembly.
//!
//! This module runs the full reconstruction pipeline for one query:
//! validate the rules, normalize the raw events, pair each staff member's
//! stream into shifts, and aggregate per-staff analytics. It is the one
//! entry point callers need; everything below it is a pure stage.

use crate::config::BusinessRules;
use crate::error::EngineResult;
use crate::models::{AttendanceReport, RawClockEvent, ReportingWindow};

use super::analytics::aggregate_staff;
use super::normalizer::normalize_events;
use super::pairing::reconstruct_shifts;

/// Reconstructs shifts and analytics for a reporting query.
///
/// The rules are validated first; an invalid rule set fails the whole
/// computation before any event is touched, since every duration decision
/// depends on it. Everything after that is infallible: malformed events
/// and structural anomalies are reported inside the returned
/// [`AttendanceReport`], never as errors.
///
/// Output ordering is deterministic regardless of input order: shifts by
/// clock-in time descending (newest first, for display; ties break on the
/// clock-in event id), analytics by staff id ascending, and anomalies in
/// staff order then stream order.
///
/// # Example
///
/// ```
/// use attendance_engine::config::BusinessRules;
/// use attendance_engine::models::ReportingWindow;
/// use attendance_engine::reconstruction::build_report;
/// use chrono::DateTime;
///
/// let rules = BusinessRules {
///     break_eligible_minutes: 360,
///     break_deduction_minutes: 60,
///     daily_regular_minutes: 480,
/// };
/// let window = ReportingWindow {
///     start: DateTime::parse_from_rfc3339("2026-03-01T00:00:00+07:00").unwrap(),
///     end: DateTime::parse_from_rfc3339("2026-03-31T23:59:59+07:00").unwrap(),
/// };
///
/// let report = build_report(&[], &window, None, &rules).unwrap();
/// assert!(report.shifts.is_empty());
/// assert_eq!(report.rules, rules);
/// ```
pub fn build_report(
    events: &[RawClockEvent],
    window: &ReportingWindow,
    staff_filter: Option<&[String]>,
    rules: &BusinessRules,
) -> EngineResult<AttendanceReport> {
    rules.validate()?;

    let normalized = normalize_events(events, window, staff_filter);

    let mut shifts = Vec::new();
    let mut analytics = Vec::new();
    let mut anomalies = Vec::new();

    for (staff_id, stream) in &normalized.by_staff {
        let staff_name = stream[0].staff_name.clone();

        let (staff_shifts, staff_anomalies) = reconstruct_shifts(stream, rules);
        analytics.push(aggregate_staff(staff_id, &staff_name, &staff_shifts, stream));

        shifts.extend(staff_shifts);
        anomalies.extend(staff_anomalies);
    }

    shifts.sort_by(|a, b| {
        b.clock_in_time
            .cmp(&a.clock_in_time)
            .then_with(|| b.clock_in_event_id.cmp(&a.clock_in_event_id))
    });

    Ok(AttendanceReport {
        window: window.clone(),
        rules: rules.clone(),
        shifts,
        analytics,
        anomalies,
        normalization_issues: normalized.issues,
    })
}
