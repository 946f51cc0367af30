//! Clock event models.
//!
//! This module defines the raw and normalized forms of a clock event. The
//! raw form carries its timestamp as an RFC 3339 string exactly as received
//! from the capture system, so a single malformed value can be isolated
//! instead of failing the whole batch; the normalized form carries a parsed
//! zoned timestamp.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// The direction of a clock event.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockAction;
///
/// let action: ClockAction = serde_json::from_str("\"clock_in\"").unwrap();
/// assert_eq!(action, ClockAction::ClockIn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockAction {
    /// The staff member started a work session.
    ClockIn,
    /// The staff member ended a work session.
    ClockOut,
}

/// A clock event as received from the capture system, before normalization.
///
/// The timestamp is an RFC 3339 string with an explicit UTC offset
/// (e.g., `"2026-03-02T09:00:00+07:00"`). The normalizer parses it and
/// reports unparsable values as normalization issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClockEvent {
    /// Unique identifier assigned by the capture system.
    pub id: String,
    /// The staff member this event belongs to.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// Whether this is a clock-in or clock-out.
    pub action: ClockAction,
    /// The event instant as an RFC 3339 string in business-local time.
    pub timestamp: String,
    /// Whether a verification photo was captured with this event.
    #[serde(default)]
    pub photo_captured: bool,
    /// Camera failure description, if photo capture failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_error: Option<String>,
}

/// An immutable, normalized clock event.
///
/// The timestamp carries its UTC offset; the engine never reinterprets it
/// in another zone. Calendar dates derived from it are local to that offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Unique identifier assigned by the capture system.
    pub id: String,
    /// The staff member this event belongs to.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// Whether this is a clock-in or clock-out.
    pub action: ClockAction,
    /// The event instant, with explicit UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// Whether a verification photo was captured with this event.
    pub photo_captured: bool,
    /// Camera failure description, if photo capture failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_error: Option<String>,
}

impl ClockEvent {
    /// Returns the calendar date of the event in its own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
