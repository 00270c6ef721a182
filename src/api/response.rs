//! Response types for the vacation pay API.
//!
//! Successful responses wrap engine results with request metadata. Errors share
//! one JSON shape carrying a machine-readable code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PaidDayBreakdown;
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationInput, CalculationOutput, Diagnostic};

/// A diagnostic as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticBody {
    /// Stable code, e.g. `zero_period`.
    pub code: String,
    /// Text suitable for display.
    pub message: String,
}

impl From<Diagnostic> for DiagnosticBody {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            code: diagnostic.code().to_string(),
            message: diagnostic.message().to_string(),
        }
    }
}

/// Body returned by `/recompute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the figures.
    pub engine_version: String,
    /// The input after normalization, to be stored back by the client.
    pub input: CalculationInput,
    /// The derived figures.
    pub output: CalculationOutput,
    /// Soft problems found during the calculation.
    pub diagnostics: Vec<DiagnosticBody>,
    /// Whether the income list was resized to the period length.
    pub months_resized: bool,
    /// One label per income slot, oldest first.
    pub labels: Vec<String>,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

/// Body returned by `/paid-days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidDaysResponse {
    /// Payable days in the range.
    pub paid_days: u32,
    /// How the count splits into calendar days, rest days and holidays.
    pub breakdown: PaidDayBreakdown,
}

/// Body returned by `/labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsResponse {
    /// Month labels, oldest first.
    pub labels: Vec<String>,
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
        // Settings are loaded before the router exists, so only export fails here.
        let error = match error {
            EngineError::ExportError { message } => {
                ApiError::with_details("EXPORT_ERROR", "Export failed", message)
            }
            other => ApiError::with_details("INTERNAL_ERROR", "Internal error", other.to_string()),
        };
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}
