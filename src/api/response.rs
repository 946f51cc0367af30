//! Response types for the attendance engine API.
//!
//! This module defines the success payload for the `/reconstruct` endpoint
//! and the error envelope returned for failed requests.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendanceReport, NormalizationIssue, ProcessAnomaly, ReportingWindow, StaffTimeAnalytics,
    WorkShift,
};
use crate::config::BusinessRules;

/// Success payload for the `/reconstruct` endpoint.
///
/// Wraps the engine's report with request-scoped metadata (report id,
/// generation time, engine version). The metadata is stamped at this I/O
/// boundary; the engine itself never reads ambient time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionResponse {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The reporting window the query covered.
    pub window: ReportingWindow,
    /// The thresholds that were in effect.
    pub rules: BusinessRules,
    /// Reconstructed shifts, newest clock-in first.
    pub shifts: Vec<WorkShift>,
    /// Per-staff analytics, sorted by staff id.
    pub analytics: Vec<StaffTimeAnalytics>,
    /// Structural anomalies with no shift to attach to.
    pub anomalies: Vec<ProcessAnomaly>,
    /// Events excluded during normalization.
    pub normalization_issues: Vec<NormalizationIssue>,
}

impl ReconstructionResponse {
    /// Wraps an engine report with request-scoped metadata.
    pub fn new(report_id: Uuid, generated_at: DateTime<Utc>, report: AttendanceReport) -> Self {
        Self {
            report_id,
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            window: report.window,
            rules: report.rules,
            shifts: report.shifts,
            analytics: report.analytics,
            anomalies: report.anomalies,
            normalization_issues: report.normalization_issues,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRules { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RULES",
                    format!("Invalid business rule '{}'", field),
                    message,
                ),
            },
        }
    }
}
