//! Per-staff analytics aggregation.
//!
//! This module rolls one staff member's reconstructed shifts and raw clock
//! events up into a [`StaffTimeAnalytics`] summary. It reads only that staff
//! member's data, so per-staff analytics are independent and can be computed
//! in isolation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::models::{ClockEvent, StaffTimeAnalytics, WorkShift};

/// Converts a minute count to hours as an exact decimal division.
fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Aggregates one staff member's window into summary statistics.
///
/// Hour sums cover complete shifts only; incomplete shifts contribute zero
/// hours but stay visible through the shift and issue counts. `total_hours`
/// is derived as `regular_hours + overtime_hours` so the two decompositions
/// agree exactly. `days_worked` counts distinct anchor dates across all
/// shifts, complete or not.
///
/// Photo compliance is computed over the raw events (clock-ins and
/// clock-outs both count), so it reflects operational compliance
/// independent of shift completeness. The rate and the per-shift average
/// are rounded to two decimal places; every guard against an empty
/// denominator yields zero, never a division error.
pub fn aggregate_staff(
    staff_id: &str,
    staff_name: &str,
    shifts: &[WorkShift],
    events: &[ClockEvent],
) -> StaffTimeAnalytics {
    let complete: Vec<&WorkShift> = shifts.iter().filter(|s| s.is_complete).collect();

    let days_worked = shifts
        .iter()
        .map(|s| s.anchor_date)
        .collect::<BTreeSet<_>>()
        .len() as u32;

    let regular_minutes: i64 = complete.iter().map(|s| s.regular_minutes()).sum();
    let overtime_minutes: i64 = complete.iter().map(|s| s.overtime_minutes).sum();
    let total_break_minutes: i64 = shifts.iter().map(|s| s.break_minutes).sum();

    let regular_hours = minutes_to_hours(regular_minutes);
    let overtime_hours = minutes_to_hours(overtime_minutes);
    let total_hours = regular_hours + overtime_hours;

    let average_shift_hours = if complete.is_empty() {
        Decimal::ZERO
    } else {
        (total_hours / Decimal::new(complete.len() as i64, 0)).round_dp(2)
    };

    let longest_shift_hours = complete
        .iter()
        .map(|s| s.net_minutes)
        .max()
        .map(minutes_to_hours)
        .unwrap_or(Decimal::ZERO);

    let shortest_shift_hours = complete
        .iter()
        .map(|s| s.net_minutes)
        .min()
        .map(minutes_to_hours)
        .unwrap_or(Decimal::ZERO);

    let photo_compliance_rate = if events.is_empty() {
        Decimal::ZERO
    } else {
        let with_photo = events.iter().filter(|e| e.photo_captured).count();
        (Decimal::new(with_photo as i64 * 100, 0) / Decimal::new(events.len() as i64, 0))
            .round_dp(2)
    };

    StaffTimeAnalytics {
        staff_id: staff_id.to_string(),
        staff_name: staff_name.to_string(),
        days_worked,
        total_shifts: shifts.len() as u32,
        complete_shifts: complete.len() as u32,
        incomplete_shifts: (shifts.len() - complete.len()) as u32,
        shifts_with_issues: shifts.iter().filter(|s| s.has_issues()).count() as u32,
        total_hours,
        regular_hours,
        overtime_hours,
        average_shift_hours,
        longest_shift_hours,
        shortest_shift_hours,
        total_break_minutes,
        photo_compliance_rate,
    }
}
