//! Shift reconstruction from paired clock events.
//!
//! This module pairs a staff member's sorted clock events into
//! [`WorkShift`] records with a single forward scan. The scan is a
//! two-state machine: awaiting a clock-in, or awaiting the clock-out that
//! closes the currently open shift. Every anomaly in the stream becomes a
//! note or issue on the nearest shift, or a standalone [`ProcessAnomaly`]
//! when there is no shift to attach to; no event is dropped silently.

use crate::config::BusinessRules;
use crate::models::{AnomalyKind, ClockAction, ClockEvent, ProcessAnomaly, WorkShift};

use super::duration::apply_business_rules;

/// Issue attached when a clock-in arrives while a shift is still open.
pub const ISSUE_MISSING_CLOCK_OUT: &str = "missing clock-out before new clock-in";

/// Issue attached when the scan ends with a shift still open.
pub const ISSUE_OPEN_AT_WINDOW_END: &str = "shift still open at end of reporting window";

/// Note attached to a valid shift with zero elapsed time.
pub const NOTE_ZERO_DURATION: &str = "zero-duration shift";

/// Note attached when the clock-out falls on a later calendar date.
pub const NOTE_CROSSES_MIDNIGHT: &str = "shift crosses midnight";

/// Message carried by an orphan clock-out anomaly.
pub const ANOMALY_ORPHAN_CLOCK_OUT: &str = "clock-out with no matching clock-in";

/// Pairs one staff member's sorted events into shifts.
///
/// Scans left to right:
/// - A clock-in opens a new shift. If a shift was already open, the prior
///   shift never closed: it is emitted as incomplete with
///   [`ISSUE_MISSING_CLOCK_OUT`] before the new shift opens.
/// - A clock-out closes the open shift, producing a complete [`WorkShift`]
///   with its durations applied. A clock-out with no open shift is an
///   orphan: it becomes a standalone [`ProcessAnomaly`], since there is no
///   clock-in to anchor a shift record.
/// - A shift still open when the events run out is emitted as incomplete
///   with [`ISSUE_OPEN_AT_WINDOW_END`].
///
/// A clock-in immediately followed by a clock-out with zero elapsed time is
/// still a valid shift of zero net minutes, flagged with
/// [`NOTE_ZERO_DURATION`] for reviewer visibility. A clock-out on a later
/// calendar date than its clock-in marks the shift `crosses_midnight`; the
/// anchor date stays the clock-in's date, because a shift belongs to the
/// day it started.
///
/// This stage never fails. Incomplete shifts carry zero minutes and stay
/// visible for issue tracking.
///
/// The caller must pass events for a single staff member, sorted
/// chronologically (see [`normalize_events`](super::normalize_events)).
pub fn reconstruct_shifts(
    events: &[ClockEvent],
    rules: &BusinessRules,
) -> (Vec<WorkShift>, Vec<ProcessAnomaly>) {
    let mut shifts = Vec::new();
    let mut anomalies = Vec::new();
    let mut open: Option<&ClockEvent> = None;

    for event in events {
        match (event.action, open) {
            (ClockAction::ClockIn, None) => {
                open = Some(event);
            }
            (ClockAction::ClockIn, Some(prior)) => {
                shifts.push(incomplete_shift(prior, ISSUE_MISSING_CLOCK_OUT));
                open = Some(event);
            }
            (ClockAction::ClockOut, Some(clock_in)) => {
                shifts.push(complete_shift(clock_in, event, rules));
                open = None;
            }
            (ClockAction::ClockOut, None) => {
                anomalies.push(ProcessAnomaly {
                    staff_id: event.staff_id.clone(),
                    staff_name: event.staff_name.clone(),
                    event_id: event.id.clone(),
                    timestamp: event.timestamp,
                    kind: AnomalyKind::OrphanClockOut,
                    message: ANOMALY_ORPHAN_CLOCK_OUT.to_string(),
                });
            }
        }
    }

    if let Some(clock_in) = open {
        shifts.push(incomplete_shift(clock_in, ISSUE_OPEN_AT_WINDOW_END));
    }

    (shifts, anomalies)
}

/// Builds a complete shift from a clock-in/clock-out pair.
fn complete_shift(
    clock_in: &ClockEvent,
    clock_out: &ClockEvent,
    rules: &BusinessRules,
) -> WorkShift {
    let raw_minutes = (clock_out.timestamp - clock_in.timestamp).num_minutes();
    let breakdown = apply_business_rules(raw_minutes, rules);
    let crosses_midnight = clock_out.local_date() != clock_in.local_date();

    let mut notes = Vec::new();
    if raw_minutes == 0 {
        notes.push(NOTE_ZERO_DURATION.to_string());
    }
    if crosses_midnight {
        notes.push(NOTE_CROSSES_MIDNIGHT.to_string());
    }

    WorkShift {
        staff_id: clock_in.staff_id.clone(),
        staff_name: clock_in.staff_name.clone(),
        anchor_date: clock_in.local_date(),
        clock_in_time: clock_in.timestamp,
        clock_out_time: Some(clock_out.timestamp),
        clock_in_event_id: clock_in.id.clone(),
        clock_out_event_id: Some(clock_out.id.clone()),
        raw_minutes: breakdown.raw_minutes,
        break_minutes: breakdown.break_minutes,
        net_minutes: breakdown.net_minutes,
        overtime_minutes: breakdown.overtime_minutes,
        is_complete: true,
        crosses_midnight,
        notes,
        issues: Vec::new(),
    }
}

/// Builds an incomplete shift from an unmatched clock-in.
fn incomplete_shift(clock_in: &ClockEvent, issue: &str) -> WorkShift {
    WorkShift {
        staff_id: clock_in.staff_id.clone(),
        staff_name: clock_in.staff_name.clone(),
        anchor_date: clock_in.local_date(),
        clock_in_time: clock_in.timestamp,
        clock_out_time: None,
        clock_in_event_id: clock_in.id.clone(),
        clock_out_event_id: None,
        raw_minutes: 0,
        break_minutes: 0,
        net_minutes: 0,
        overtime_minutes: 0,
        is_complete: false,
        crosses_midnight: false,
        notes: Vec::new(),
        issues: vec![issue.to_string()],
    }
}
