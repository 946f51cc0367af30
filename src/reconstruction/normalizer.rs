//! Event normalization.
//!
//! This module turns the raw, unordered event log from the capture system
//! into per-staff chronological event streams ready for pairing. Malformed
//! timestamps are isolated as normalization issues; events outside the
//! reporting window or excluded by the staff filter are out of query scope
//! and dropped silently.

use std::collections::BTreeMap;

use chrono::DateTime;

use crate::models::{ClockEvent, NormalizationIssue, RawClockEvent, ReportingWindow};

/// The output of event normalization: per-staff sorted streams plus the
/// events that could not be normalized.
///
/// The map is keyed by staff id; `BTreeMap` keeps staff iteration order
/// deterministic so repeated runs over the same input produce identical
/// output.
#[derive(Debug, Clone, Default)]
pub struct NormalizedEvents {
    /// Chronologically sorted events per staff member.
    pub by_staff: BTreeMap<String, Vec<ClockEvent>>,
    /// Events excluded because they could not be parsed.
    pub issues: Vec<NormalizationIssue>,
}

/// Validates, filters, groups, and sorts raw clock events.
///
/// Each event's timestamp is parsed as RFC 3339; parse failures become
/// [`NormalizationIssue`]s and processing continues for every other event.
/// Surviving events are scoped to the window (and to `staff_filter` when
/// one is supplied), grouped per staff member, and sorted chronologically.
/// Timestamp ties break on the event id, so the result is reproducible
/// regardless of input order.
///
/// Pure transformation: no side effects, no ambient time.
pub fn normalize_events(
    events: &[RawClockEvent],
    window: &ReportingWindow,
    staff_filter: Option<&[String]>,
) -> NormalizedEvents {
    let mut normalized = NormalizedEvents::default();

    for event in events {
        if let Some(filter) = staff_filter {
            if !filter.contains(&event.staff_id) {
                continue;
            }
        }

        let timestamp = match DateTime::parse_from_rfc3339(&event.timestamp) {
            Ok(ts) => ts,
            Err(e) => {
                normalized.issues.push(NormalizationIssue {
                    event_id: event.id.clone(),
                    staff_id: event.staff_id.clone(),
                    message: format!("unparsable timestamp '{}': {}", event.timestamp, e),
                });
                continue;
            }
        };

        if !window.contains(timestamp) {
            continue;
        }

        normalized
            .by_staff
            .entry(event.staff_id.clone())
            .or_default()
            .push(ClockEvent {
                id: event.id.clone(),
                staff_id: event.staff_id.clone(),
                staff_name: event.staff_name.clone(),
                action: event.action,
                timestamp,
                photo_captured: event.photo_captured,
                camera_error: event.camera_error.clone(),
            });
    }

    for stream in normalized.by_staff.values_mut() {
        stream.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockAction;

    fn raw_event(id: &str, staff_id: &str, action: ClockAction, timestamp: &str) -> RawClockEvent {
        RawClockEvent {
            id: id.to_string(),
            staff_id: staff_id.to_string(),
            staff_name: format!("Staff {}", staff_id),
            action,
            timestamp: timestamp.to_string(),
            photo_captured: true,
            camera_error: None,
        }
    }

    fn march_window() -> ReportingWindow {
        ReportingWindow {
            start: DateTime::parse_from_rfc3339("2026-03-01T00:00:00+07:00").unwrap(),
            end: DateTime::parse_from_rfc3339("2026-03-31T23:59:59+07:00").unwrap(),
        }
    }

    /// NORM-001: unordered input comes out chronologically sorted
    #[test]
    fn test_norm_001_sorts_chronologically() {
        let events = vec![
            raw_event("evt_b", "staff_001", ClockAction::ClockOut, "2026-03-02T17:00:00+07:00"),
            raw_event("evt_a", "staff_001", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
        ];

        let normalized = normalize_events(&events, &march_window(), None);
        let stream = &normalized.by_staff["staff_001"];

        assert_eq!(stream.len(), 2);
        assert_eq!(stream[0].id, "evt_a");
        assert_eq!(stream[1].id, "evt_b");
    }

    /// NORM-002: timestamp ties break on event id
    #[test]
    fn test_norm_002_ties_break_on_event_id() {
        let events = vec![
            raw_event("evt_2", "staff_001", ClockAction::ClockOut, "2026-03-02T09:00:00+07:00"),
            raw_event("evt_1", "staff_001", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
        ];

        let normalized = normalize_events(&events, &march_window(), None);
        let stream = &normalized.by_staff["staff_001"];

        assert_eq!(stream[0].id, "evt_1");
        assert_eq!(stream[1].id, "evt_2");
    }

    /// NORM-003: a malformed timestamp is flagged and the rest survive
    #[test]
    fn test_norm_003_malformed_timestamp_is_isolated() {
        let events = vec![
            raw_event("evt_bad", "staff_001", ClockAction::ClockIn, "not-a-time"),
            raw_event("evt_ok", "staff_001", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
        ];

        let normalized = normalize_events(&events, &march_window(), None);

        assert_eq!(normalized.by_staff["staff_001"].len(), 1);
        assert_eq!(normalized.by_staff["staff_001"][0].id, "evt_ok");
        assert_eq!(normalized.issues.len(), 1);
        assert_eq!(normalized.issues[0].event_id, "evt_bad");
        assert!(normalized.issues[0].message.contains("not-a-time"));
    }

    /// NORM-004: a timestamp without an offset is malformed
    #[test]
    fn test_norm_004_missing_offset_is_malformed() {
        let events = vec![raw_event(
            "evt_naive",
            "staff_001",
            ClockAction::ClockIn,
            "2026-03-02T09:00:00",
        )];

        let normalized = normalize_events(&events, &march_window(), None);

        assert!(normalized.by_staff.is_empty());
        assert_eq!(normalized.issues.len(), 1);
    }

    /// NORM-005: events outside the window are dropped silently
    #[test]
    fn test_norm_005_out_of_window_excluded_silently() {
        let events = vec![
            raw_event("evt_feb", "staff_001", ClockAction::ClockIn, "2026-02-15T09:00:00+07:00"),
            raw_event("evt_mar", "staff_001", ClockAction::ClockIn, "2026-03-15T09:00:00+07:00"),
        ];

        let normalized = normalize_events(&events, &march_window(), None);

        assert_eq!(normalized.by_staff["staff_001"].len(), 1);
        assert_eq!(normalized.by_staff["staff_001"][0].id, "evt_mar");
        assert!(normalized.issues.is_empty());
    }

    /// NORM-006: staff filter scopes the result
    #[test]
    fn test_norm_006_staff_filter() {
        let events = vec![
            raw_event("evt_1", "staff_001", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
            raw_event("evt_2", "staff_002", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
        ];

        let filter = vec!["staff_002".to_string()];
        let normalized = normalize_events(&events, &march_window(), Some(&filter));

        assert!(!normalized.by_staff.contains_key("staff_001"));
        assert_eq!(normalized.by_staff["staff_002"].len(), 1);
    }

    /// NORM-007: events group by staff member
    #[test]
    fn test_norm_007_groups_by_staff() {
        let events = vec![
            raw_event("evt_1", "staff_002", ClockAction::ClockIn, "2026-03-02T09:00:00+07:00"),
            raw_event("evt_2", "staff_001", ClockAction::ClockIn, "2026-03-02T10:00:00+07:00"),
            raw_event("evt_3", "staff_001", ClockAction::ClockOut, "2026-03-02T18:00:00+07:00"),
        ];

        let normalized = normalize_events(&events, &march_window(), None);

        assert_eq!(normalized.by_staff.len(), 2);
        assert_eq!(normalized.by_staff["staff_001"].len(), 2);
        assert_eq!(normalized.by_staff["staff_002"].len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let normalized = normalize_events(&[], &march_window(), None);
        assert!(normalized.by_staff.is_empty());
        assert!(normalized.issues.is_empty());
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let window = march_window();
        let events = vec![
            raw_event("evt_start", "staff_001", ClockAction::ClockIn, "2026-03-01T00:00:00+07:00"),
            raw_event("evt_end", "staff_001", ClockAction::ClockOut, "2026-03-31T23:59:59+07:00"),
        ];

        let normalized = normalize_events(&events, &window, None);
        assert_eq!(normalized.by_staff["staff_001"].len(), 2);
    }
}
