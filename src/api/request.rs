//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the `/reconstruct`
//! endpoint. Event timestamps stay strings at this layer so one malformed
//! value surfaces as a normalization issue instead of rejecting the batch;
//! the window bounds are typed, since a query with an unreadable window
//! has no meaningful answer.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{ClockAction, RawClockEvent, ReportingWindow};

/// Request body for the `/reconstruct` endpoint.
///
/// Contains the raw clock events to reconstruct, the reporting window, and
/// an optional staff filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionRequest {
    /// The raw clock events, in any order.
    pub events: Vec<ClockEventRequest>,
    /// The reporting window the query covers.
    pub window: WindowRequest,
    /// Optional staff filter; when present, only these staff ids are reconstructed.
    #[serde(default)]
    pub staff_ids: Option<Vec<String>>,
}

/// A raw clock event in a reconstruction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEventRequest {
    /// Unique identifier assigned by the capture system.
    pub id: String,
    /// The staff member this event belongs to.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// Whether this is a clock-in or clock-out.
    pub action: ClockAction,
    /// The event instant as an RFC 3339 string with explicit offset.
    pub timestamp: String,
    /// Whether a verification photo was captured with this event.
    #[serde(default)]
    pub photo_captured: bool,
    /// Camera failure description, if photo capture failed.
    #[serde(default)]
    pub camera_error: Option<String>,
}

/// The reporting window in a reconstruction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRequest {
    /// The first instant inside the window.
    pub start: DateTime<FixedOffset>,
    /// The last instant inside the window.
    pub end: DateTime<FixedOffset>,
}

impl From<ClockEventRequest> for RawClockEvent {
    fn from(req: ClockEventRequest) -> Self {
        RawClockEvent {
            id: req.id,
            staff_id: req.staff_id,
            staff_name: req.staff_name,
            action: req.action,
            timestamp: req.timestamp,
            photo_captured: req.photo_captured,
            camera_error: req.camera_error,
        }
    }
}

impl From<WindowRequest> for ReportingWindow {
    fn from(req: WindowRequest) -> Self {
        ReportingWindow {
            start: req.start,
            end: req.end,
        }
    }
}
