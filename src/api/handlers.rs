//! HTTP request handlers for the vacation pay API.
//!
//! Every handler is stateless apart from the engine settings: the client sends
//! the full form snapshot and receives the recomputed figures.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{generate_labels, paid_day_breakdown, recompute};
use crate::export::{EXPORT_FILE_NAME, ExportRecord, to_csv_string};
use crate::models::CalculationInput;

use super::request::{LabelsRequest, PaidDaysRequest, RecomputeRequest};
use super::response::{
    ApiError, ApiErrorResponse, DiagnosticBody, LabelsResponse, PaidDaysResponse,
    RecomputeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recompute", post(recompute_handler))
        .route("/paid-days", post(paid_days_handler))
        .route("/labels", post(labels_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("VALIDATION_ERROR", body_text)
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Labels for every income slot, falling back to `Month N` without a start date.
fn slot_labels(input: &CalculationInput, state: &AppState) -> Vec<String> {
    let labels = generate_labels(
        input.start_date,
        input.months_count,
        &state.settings().month_names,
    );
    if labels.is_empty() {
        (1..=input.months_count).map(|i| format!("Month {}", i)).collect()
    } else {
        labels
    }
}

/// Handler for POST /recompute.
///
/// Coerces the form snapshot, runs the engine and returns the normalized input,
/// derived figures, diagnostics, month labels and audit trace.
async fn recompute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recompute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let input = request.to_input(state.settings());
    let result = recompute(&input, state.settings());

    if !result.diagnostics.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            diagnostics = %result.diagnostics_text(),
            "Calculation produced diagnostics"
        );
    }
    info!(
        correlation_id = %correlation_id,
        months_count = result.input.months_count,
        paid_days = result.output.paid_days,
        vacation_pay = %result.output.vacation_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Recompute completed"
    );

    let labels = slot_labels(&result.input, &state);
    let response = RecomputeResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        diagnostics: result.diagnostics.iter().copied().map(DiagnosticBody::from).collect(),
        months_resized: result.months_resized,
        labels,
        input: result.input,
        output: result.output,
        audit_trace: result.audit_trace,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /paid-days.
///
/// Counts payable days for a date range. Missing or invalid dates count zero.
async fn paid_days_handler(
    payload: Result<Json<PaidDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paid days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let breakdown = paid_day_breakdown(request.start(), request.end(), &request.holiday_set());
    info!(
        correlation_id = %correlation_id,
        paid_days = breakdown.paid_days,
        "Paid days counted"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PaidDaysResponse {
            paid_days: breakdown.paid_days,
            breakdown,
        }),
    )
        .into_response()
}

/// Handler for POST /labels.
///
/// The requested count is capped at the configured maximum period.
async fn labels_handler(
    State(state): State<AppState>,
    payload: Result<Json<LabelsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labels request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let count = match request.count() {
        0 => 0,
        requested => state.settings().clamp_months(requested),
    };
    let labels = generate_labels(request.start(), count, &state.settings().month_names);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(LabelsResponse { labels }),
    )
        .into_response()
}

/// Handler for POST /export.
///
/// Recomputes the snapshot and returns it as a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = request.to_input(state.settings());
    let result = recompute(&input, state.settings());
    let record = ExportRecord::build(&result.input, &result.output);

    match to_csv_string(&record) {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                bytes = csv.len(),
                "Export completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
