//! Core data models for the vacation pay engine.
//!
//! This module contains the input snapshot, the holiday set and the result types.

mod calculation_input;
mod calculation_output;
mod holiday;

pub use calculation_input::CalculationInput;
pub use calculation_output::{
    AuditStep, AuditTrace, CalculationOutput, Diagnostic, Recomputation,
};
pub use holiday::HolidaySet;
