//! Break deduction and overtime split.
//!
//! This module turns a shift's raw elapsed minutes into the paid-time
//! breakdown: break deduction for sufficiently long shifts, then the
//! regular/overtime split against the daily threshold. Every threshold
//! comes from [`BusinessRules`]; nothing is hard-coded here.

use serde::{Deserialize, Serialize};

use crate::config::BusinessRules;

/// The paid-time breakdown of one shift's raw elapsed minutes.
///
/// Conservation holds by construction: `raw_minutes = net_minutes +
/// break_minutes` and `net_minutes = regular_minutes + overtime_minutes`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::BusinessRules;
/// use attendance_engine::reconstruction::apply_business_rules;
///
/// let rules = BusinessRules {
///     break_eligible_minutes: 360,
///     break_deduction_minutes: 60,
///     daily_regular_minutes: 480,
/// };
/// let breakdown = apply_business_rules(480, &rules);
/// assert_eq!(breakdown.break_minutes, 60);
/// assert_eq!(breakdown.net_minutes, 420);
/// assert_eq!(breakdown.overtime_minutes, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Elapsed minutes between clock-in and clock-out.
    pub raw_minutes: i64,
    /// Minutes deducted as an assumed unpaid break.
    pub break_minutes: i64,
    /// Worked minutes after break deduction.
    pub net_minutes: i64,
    /// Net minutes paid at the regular rate.
    pub regular_minutes: i64,
    /// Net minutes above the daily regular-hours threshold.
    pub overtime_minutes: i64,
}

/// Applies the break and overtime thresholds to a shift's raw minutes.
///
/// A shift of at least `break_eligible_minutes` loses
/// `break_deduction_minutes` as an assumed unpaid break; the deduction is
/// capped at the raw time so net minutes never go negative and conservation
/// holds. Net minutes above `daily_regular_minutes` count as overtime.
///
/// Deterministic given the same inputs; no global state is consulted.
/// Negative raw input clamps to zero, keeping the function total.
///
/// # Examples
///
/// ```
/// use attendance_engine::config::BusinessRules;
/// use attendance_engine::reconstruction::apply_business_rules;
///
/// let rules = BusinessRules {
///     break_eligible_minutes: 360,
///     break_deduction_minutes: 60,
///     daily_regular_minutes: 480,
/// };
///
/// // A 12-hour day: break deducted, then 3 hours of overtime.
/// let long_day = apply_business_rules(720, &rules);
/// assert_eq!(long_day.net_minutes, 660);
/// assert_eq!(long_day.regular_minutes, 480);
/// assert_eq!(long_day.overtime_minutes, 180);
///
/// // A short shift: too short for a break, no overtime.
/// let short_day = apply_business_rules(240, &rules);
/// assert_eq!(short_day.break_minutes, 0);
/// assert_eq!(short_day.net_minutes, 240);
/// ```
pub fn apply_business_rules(raw_minutes: i64, rules: &BusinessRules) -> DurationBreakdown {
    let raw_minutes = raw_minutes.max(0);

    let break_minutes = if raw_minutes >= rules.break_eligible_minutes {
        // Cap at the raw time so net minutes never go negative.
        rules.break_deduction_minutes.min(raw_minutes)
    } else {
        0
    };

    let net_minutes = raw_minutes - break_minutes;
    let overtime_minutes = (net_minutes - rules.daily_regular_minutes).max(0);
    let regular_minutes = net_minutes - overtime_minutes;

    DurationBreakdown {
        raw_minutes,
        break_minutes,
        net_minutes,
        regular_minutes,
        overtime_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> BusinessRules {
        BusinessRules {
            break_eligible_minutes: 360,
            break_deduction_minutes: 60,
            daily_regular_minutes: 480,
        }
    }

    /// DUR-001: standard 8-hour day loses the break, no overtime
    #[test]
    fn test_dur_001_standard_day() {
        let breakdown = apply_business_rules(480, &rules());

        assert_eq!(breakdown.raw_minutes, 480);
        assert_eq!(breakdown.break_minutes, 60);
        assert_eq!(breakdown.net_minutes, 420);
        assert_eq!(breakdown.regular_minutes, 420);
        assert_eq!(breakdown.overtime_minutes, 0);
    }

    /// DUR-002: 12-hour day triggers overtime after the break
    #[test]
    fn test_dur_002_overtime_day() {
        let breakdown = apply_business_rules(720, &rules());

        assert_eq!(breakdown.break_minutes, 60);
        assert_eq!(breakdown.net_minutes, 660);
        assert_eq!(breakdown.regular_minutes, 480);
        assert_eq!(breakdown.overtime_minutes, 180);
    }

    /// DUR-003: shift below the break threshold keeps all its minutes
    #[test]
    fn test_dur_003_short_shift_no_break() {
        let breakdown = apply_business_rules(300, &rules());

        assert_eq!(breakdown.break_minutes, 0);
        assert_eq!(breakdown.net_minutes, 300);
        assert_eq!(breakdown.overtime_minutes, 0);
    }

    /// DUR-004: exactly at the break threshold deducts the break
    #[test]
    fn test_dur_004_break_threshold_boundary() {
        let breakdown = apply_business_rules(360, &rules());

        assert_eq!(breakdown.break_minutes, 60);
        assert_eq!(breakdown.net_minutes, 300);
    }

    /// DUR-005: net exactly at the regular threshold is not overtime
    #[test]
    fn test_dur_005_regular_threshold_boundary() {
        // 540 raw - 60 break = 480 net, exactly the daily threshold.
        let breakdown = apply_business_rules(540, &rules());

        assert_eq!(breakdown.net_minutes, 480);
        assert_eq!(breakdown.regular_minutes, 480);
        assert_eq!(breakdown.overtime_minutes, 0);
    }

    /// DUR-006: one minute over the regular threshold is one minute of overtime
    #[test]
    fn test_dur_006_one_minute_of_overtime() {
        let breakdown = apply_business_rules(541, &rules());

        assert_eq!(breakdown.net_minutes, 481);
        assert_eq!(breakdown.overtime_minutes, 1);
    }

    #[test]
    fn test_zero_raw_minutes() {
        let breakdown = apply_business_rules(0, &rules());

        assert_eq!(breakdown.raw_minutes, 0);
        assert_eq!(breakdown.break_minutes, 0);
        assert_eq!(breakdown.net_minutes, 0);
        assert_eq!(breakdown.overtime_minutes, 0);
    }

    #[test]
    fn test_negative_raw_minutes_clamp_to_zero() {
        let breakdown = apply_business_rules(-30, &rules());

        assert_eq!(breakdown.raw_minutes, 0);
        assert_eq!(breakdown.net_minutes, 0);
    }

    #[test]
    fn test_deduction_capped_at_raw_time() {
        // With a zero eligibility threshold every shift is break-eligible;
        // the deduction must not push net below zero.
        let aggressive = BusinessRules {
            break_eligible_minutes: 0,
            break_deduction_minutes: 60,
            daily_regular_minutes: 480,
        };
        let breakdown = apply_business_rules(45, &aggressive);

        assert_eq!(breakdown.break_minutes, 45);
        assert_eq!(breakdown.net_minutes, 0);
    }

    #[test]
    fn test_conservation_holds() {
        for raw in [0, 45, 300, 360, 480, 541, 720, 1440] {
            let b = apply_business_rules(raw, &rules());
            assert_eq!(b.raw_minutes, b.net_minutes + b.break_minutes);
            assert_eq!(b.net_minutes, b.regular_minutes + b.overtime_minutes);
            assert!(b.net_minutes >= 0);
        }
    }

    #[test]
    fn test_no_break_rules() {
        let no_break = BusinessRules {
            break_eligible_minutes: 0,
            break_deduction_minutes: 0,
            daily_regular_minutes: 480,
        };
        let breakdown = apply_business_rules(480, &no_break);

        assert_eq!(breakdown.break_minutes, 0);
        assert_eq!(breakdown.net_minutes, 480);
        assert_eq!(breakdown.overtime_minutes, 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let breakdown = apply_business_rules(720, &rules());
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: DurationBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
