//! Report output models.
//!
//! This module contains the [`AttendanceReport`] type and the in-band
//! problem records ([`NormalizationIssue`], [`ProcessAnomaly`]) that travel
//! with it. Data-completeness problems are part of the payload, never
//! exceptions: a payroll report must show them, not hide them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::BusinessRules;

use super::{ReportingWindow, StaffTimeAnalytics, WorkShift};

/// A single event excluded during normalization.
///
/// Malformed events are isolated and reported; they never fail the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationIssue {
    /// The event that could not be normalized.
    pub event_id: String,
    /// The staff member the event claimed to belong to.
    pub staff_id: String,
    /// What was wrong with the event.
    pub message: String,
}

/// The kind of a standalone structural anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// A clock-out with no preceding open clock-in.
    OrphanClockOut,
}

/// A structural anomaly with no shift to attach to.
///
/// An orphan clock-out has no clock-in anchor, so there is no `WorkShift`
/// to carry the issue; it surfaces as a standalone record instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAnomaly {
    /// The staff member whose event stream produced the anomaly.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// The event that triggered the anomaly.
    pub event_id: String,
    /// When the triggering event occurred.
    pub timestamp: DateTime<FixedOffset>,
    /// What kind of anomaly this is.
    pub kind: AnomalyKind,
    /// Human-readable description.
    pub message: String,
}

/// The complete output of one reconstruction pass.
///
/// Everything the reporting layer needs in one payload: the reconstructed
/// shifts (newest clock-in first, for display), per-staff analytics, the
/// standalone anomalies, the events excluded during normalization, and the
/// snapshot of the thresholds that were in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The reporting window the query covered.
    pub window: ReportingWindow,
    /// The thresholds used for every duration decision in this report.
    pub rules: BusinessRules,
    /// Reconstructed shifts, sorted by clock-in time descending.
    pub shifts: Vec<WorkShift>,
    /// One analytics entry per staff member present in the input,
    /// sorted by staff id.
    pub analytics: Vec<StaffTimeAnalytics>,
    /// Structural anomalies with no shift to attach to.
    pub anomalies: Vec<ProcessAnomaly>,
    /// Events excluded during normalization.
    pub normalization_issues: Vec<NormalizationIssue>,
}
