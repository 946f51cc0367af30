//! Shift reconstruction pipeline for the attendance engine.
//!
//! This module contains the computation stages that turn a raw clock event
//! log into reconstructed shifts and per-staff analytics: event
//! normalization, the clock-in/clock-out pairing machine, break and
//! overtime calculation, per-staff aggregation, duration formatting, and
//! the report assembly entry point. Data flows one direction through the
//! stages; each stage is a pure function.

mod analytics;
mod duration;
mod formatting;
mod normalizer;
mod pairing;
mod report;

pub use analytics::aggregate_staff;
pub use duration::{DurationBreakdown, apply_business_rules};
pub use formatting::format_duration;
pub use normalizer::{NormalizedEvents, normalize_events};
pub use pairing::{
    ANOMALY_ORPHAN_CLOCK_OUT, ISSUE_MISSING_CLOCK_OUT, ISSUE_OPEN_AT_WINDOW_END,
    NOTE_CROSSES_MIDNIGHT, NOTE_ZERO_DURATION, reconstruct_shifts,
};
pub use report::build_report;
