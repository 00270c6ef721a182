//! HTTP API for the vacation pay engine.
//!
//! A thin JSON adapter over [`recompute`](crate::calculation::recompute), payable
//! day counting, month labels and CSV export. Binding a listener is left to the
//! embedding application.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FieldValue, HolidaysField, LabelsRequest, PaidDaysRequest, RecomputeRequest};
pub use response::{
    ApiError, ApiErrorResponse, DiagnosticBody, LabelsResponse, PaidDaysResponse,
    RecomputeResponse,
};
pub use state::AppState;
