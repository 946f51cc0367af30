//! Per-staff analytics model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate attendance statistics for one staff member over a reporting window.
///
/// Hour figures are minute sums over complete shifts converted to hours;
/// incomplete shifts stay visible through the shift counts and issue counts
/// but contribute zero hours. Photo compliance is computed over raw clock
/// events so it reflects operational compliance independent of whether the
/// events paired into complete shifts.
///
/// Invariants: `total_hours = regular_hours + overtime_hours` and
/// `complete_shifts + incomplete_shifts = total_shifts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffTimeAnalytics {
    /// The staff member these statistics describe.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// Count of distinct shift anchor dates in the window.
    pub days_worked: u32,
    /// Total shifts reconstructed, complete and incomplete.
    pub total_shifts: u32,
    /// Shifts with both a clock-in and a clock-out.
    pub complete_shifts: u32,
    /// Shifts missing their clock-out within the window.
    pub incomplete_shifts: u32,
    /// Shifts carrying at least one validation issue.
    pub shifts_with_issues: u32,
    /// Net hours over complete shifts.
    pub total_hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours above the daily regular-hours threshold.
    pub overtime_hours: Decimal,
    /// Mean net hours per complete shift; 0 when there are no complete shifts.
    pub average_shift_hours: Decimal,
    /// Longest complete shift in net hours; 0 when there are no complete shifts.
    pub longest_shift_hours: Decimal,
    /// Shortest complete shift in net hours; 0 when there are no complete shifts.
    pub shortest_shift_hours: Decimal,
    /// Total break minutes deducted across complete shifts.
    pub total_break_minutes: i64,
    /// Percentage of clock events that captured a verification photo.
    pub photo_compliance_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample() -> StaffTimeAnalytics {
        StaffTimeAnalytics {
            staff_id: "staff_001".to_string(),
            staff_name: "Alice".to_string(),
            days_worked: 5,
            total_shifts: 6,
            complete_shifts: 5,
            incomplete_shifts: 1,
            shifts_with_issues: 1,
            total_hours: dec("38.5"),
            regular_hours: dec("36.5"),
            overtime_hours: dec("2"),
            average_shift_hours: dec("7.7"),
            longest_shift_hours: dec("9"),
            shortest_shift_hours: dec("6.5"),
            total_break_minutes: 300,
            photo_compliance_rate: dec("91.67"),
        }
    }

    #[test]
    fn test_shift_counts_are_consistent() {
        let analytics = sample();
        assert_eq!(
            analytics.complete_shifts + analytics.incomplete_shifts,
            analytics.total_shifts
        );
    }

    #[test]
    fn test_hours_are_consistent() {
        let analytics = sample();
        assert_eq!(
            analytics.total_hours,
            analytics.regular_hours + analytics.overtime_hours
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let analytics = sample();
        let json = serde_json::to_string(&analytics).unwrap();
        let deserialized: StaffTimeAnalytics = serde_json::from_str(&json).unwrap();
        assert_eq!(analytics, deserialized);
    }

    #[test]
    fn test_hours_serialize_as_strings() {
        let analytics = sample();
        let json = serde_json::to_string(&analytics).unwrap();
        assert!(json.contains("\"total_hours\":\"38.5\""));
        assert!(json.contains("\"photo_compliance_rate\":\"91.67\""));
    }
}
