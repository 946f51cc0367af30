//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{RawClockEvent, ReportingWindow};
use crate::reconstruction::build_report;

use super::request::ReconstructionRequest;
use super::response::{ApiError, ApiErrorResponse, ReconstructionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconstruct", post(reconstruct_handler))
        .with_state(state)
}

/// Handler for POST /reconstruct endpoint.
///
/// Accepts a batch of raw clock events plus a reporting window and returns
/// the reconstructed shifts, analytics, and anomaly records.
async fn reconstruct_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconstructionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconstruction request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let events: Vec<RawClockEvent> = request.events.into_iter().map(Into::into).collect();
    let window: ReportingWindow = request.window.into();
    let rules = state.config().rules();

    match build_report(&events, &window, request.staff_ids.as_deref(), rules) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                events_count = events.len(),
                shifts_count = report.shifts.len(),
                staff_count = report.analytics.len(),
                anomalies_count = report.anomalies.len(),
                normalization_issues_count = report.normalization_issues.len(),
                "Reconstruction completed successfully"
            );
            let response = ReconstructionResponse::new(correlation_id, Utc::now(), report);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconstruction failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
