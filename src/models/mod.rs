//! Core data models for the attendance engine.
//!
//! This module contains all the domain types used throughout the engine.

mod attendance_report;
mod clock_event;
mod reporting_window;
mod staff_analytics;
mod work_shift;

pub use attendance_report::{AnomalyKind, AttendanceReport, NormalizationIssue, ProcessAnomaly};
pub use clock_event::{ClockAction, ClockEvent, RawClockEvent};
pub use reporting_window::ReportingWindow;
pub use staff_analytics::StaffTimeAnalytics;
pub use work_shift::WorkShift;
