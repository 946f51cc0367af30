//! Work shift model.
//!
//! This module defines the [`WorkShift`] record emitted by the shift
//! reconstruction pass. Shifts are derived data: constructed once per pass
//! from exactly one clock-in event and at most one matching clock-out event,
//! never mutated afterwards, and regenerated fresh on every query.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One reconstructed work session bounded by a clock-in and (optionally)
/// a matching clock-out.
///
/// Invariants maintained by the reconstruction pass:
/// - `clock_in_time <= clock_out_time` whenever a clock-out is present
/// - `raw_minutes = net_minutes + break_minutes`
/// - `net_minutes >= 0` and `overtime_minutes <= net_minutes`
/// - incomplete shifts carry zero for all four minute fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkShift {
    /// The staff member who worked the shift.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// The calendar date the shift belongs to: the clock-in's local date.
    /// A cross-midnight shift still belongs to the day it started.
    pub anchor_date: NaiveDate,
    /// When the staff member clocked in.
    pub clock_in_time: DateTime<FixedOffset>,
    /// When the staff member clocked out, if a matching clock-out was found.
    pub clock_out_time: Option<DateTime<FixedOffset>>,
    /// The clock-in event this shift was reconstructed from.
    pub clock_in_event_id: String,
    /// The matching clock-out event, if any.
    pub clock_out_event_id: Option<String>,
    /// Elapsed minutes between clock-in and clock-out. Zero for incomplete shifts.
    pub raw_minutes: i64,
    /// Minutes deducted as an assumed unpaid break. Zero for incomplete shifts.
    pub break_minutes: i64,
    /// Worked minutes after break deduction. Zero for incomplete shifts.
    pub net_minutes: i64,
    /// Net minutes above the daily regular-hours threshold. Zero for incomplete shifts.
    pub overtime_minutes: i64,
    /// True when both a clock-in and a clock-out bound the shift.
    pub is_complete: bool,
    /// True when the clock-out falls on a later calendar date than the clock-in.
    pub crosses_midnight: bool,
    /// Informational annotations for reviewer visibility (never hidden).
    pub notes: Vec<String>,
    /// Validation problems detected during reconstruction.
    pub issues: Vec<String>,
}

impl WorkShift {
    /// Returns the net minutes paid at the regular rate.
    pub fn regular_minutes(&self) -> i64 {
        self.net_minutes - self.overtime_minutes
    }

    /// Returns true when the shift carries at least one validation issue.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
