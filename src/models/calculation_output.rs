//! Calculation result models.
//!
//! This module contains the [`CalculationOutput`] produced by every recompute, the
//! soft [`Diagnostic`]s that accompany it, and the audit trace recording how each
//! figure was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationInput;

/// The derived figures shown to the user.
///
/// Recomputed in full from a [`CalculationInput`] every time; nothing is cached.
///
/// # Example
///
/// ```
/// use vacation_pay::models::CalculationOutput;
/// use rust_decimal::Decimal;
///
/// let output = CalculationOutput::default();
/// assert_eq!(output.vacation_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Sum of monthly incomes plus bonuses, never negative.
    pub total_income: Decimal,
    /// Total income divided by the number of months.
    pub avg_monthly: Decimal,
    /// Average monthly income divided by the daily divisor.
    pub avg_daily: Decimal,
    /// Payable days multiplied by the average daily income.
    pub vacation_pay: Decimal,
    /// The payable-day count the vacation pay was computed from.
    pub paid_days: u32,
}

/// An advisory message about input the engine could not fully use.
///
/// Diagnostics never abort a calculation; the affected figures fall back to zero
/// and the rest of the output stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// The reference period has zero months.
    ZeroPeriod,
    /// The days-per-month divisor is zero.
    ZeroDailyDivisor,
    /// Automatic day counting is on but a vacation date is missing.
    MissingDatesForAutoCount,
}

impl Diagnostic {
    /// A stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::ZeroPeriod => "zero_period",
            Diagnostic::ZeroDailyDivisor => "zero_daily_divisor",
            Diagnostic::MissingDatesForAutoCount => "missing_dates_for_auto_count",
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::ZeroPeriod => "period cannot be zero",
            Diagnostic::ZeroDailyDivisor => "daily divisor is zero",
            Diagnostic::MissingDatesForAutoCount => {
                "start and end dates required for automatic day count"
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A single step in the audit trace recording one formula application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// The ordered list of steps taken by one recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// The number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Appends a step.
    pub fn push(&mut self, step: AuditStep) {
        self.steps.push(step);
    }

    /// Finds the first step recorded for the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// Everything a recompute hands back to its caller.
///
/// `input` is the normalized snapshot: months clamped, incomes resized, amounts
/// coerced and `paid_days` updated. The caller should adopt it as its new state,
/// and rebuild any per-month fields when `months_resized` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recomputation {
    /// The normalized input the output was computed from.
    pub input: CalculationInput,
    /// The derived figures.
    pub output: CalculationOutput,
    /// Advisory messages, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the monthly income list changed length.
    pub months_resized: bool,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

impl Recomputation {
    /// Returns `true` if the given diagnostic was raised.
    pub fn has_diagnostic(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }

    /// All diagnostic messages joined for display on a single line.
    pub fn diagnostics_text(&self) -> String {
        self.diagnostics
            .iter()
            .map(Diagnostic::message)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
