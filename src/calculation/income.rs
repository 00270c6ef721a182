//! Income aggregation and vacation pay formulas.
//!
//! This module provides the four formulas of the engine:
//!
//! - total income = sum of monthly incomes + bonuses, never negative
//! - average monthly income = total income / months
//! - average daily income = average monthly income / daily divisor
//! - vacation pay = payable days x average daily income
//!
//! A zero divisor does not fail: the dependent figure falls back to zero and a
//! [`Diagnostic`] is returned alongside it.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Diagnostic};

/// The result of aggregating income, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalIncomeResult {
    /// Sum of the monthly incomes and bonuses, clamped at zero.
    pub total_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of a division that may hit a zero divisor.
#[derive(Debug, Clone)]
pub struct AverageResult {
    /// The quotient, or zero when the divisor was zero.
    pub value: Decimal,
    /// Raised when the divisor was zero.
    pub diagnostic: Option<Diagnostic>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the vacation pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// Payable days multiplied by the average daily income.
    pub vacation_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the monthly incomes and bonuses.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::calculate_total_income;
/// use rust_decimal::Decimal;
///
/// let incomes = [Decimal::new(100, 0), Decimal::new(200, 0), Decimal::new(300, 0)];
/// let result = calculate_total_income(&incomes, Decimal::new(50, 0), 1);
/// assert_eq!(result.total_income, Decimal::new(650, 0));
/// ```
pub fn calculate_total_income(
    monthly_incomes: &[Decimal],
    bonuses: Decimal,
    step_number: u32,
) -> TotalIncomeResult {
    let months_sum = monthly_incomes
        .iter()
        .fold(Decimal::ZERO, |acc, income| acc.saturating_add(*income));
    let total_income = months_sum.saturating_add(bonuses).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_income".to_string(),
        rule_name: "Total Income".to_string(),
        input: serde_json::json!({
            "months_sum": months_sum.normalize().to_string(),
            "months": monthly_incomes.len(),
            "bonuses": bonuses.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_income": total_income.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            months_sum.normalize(),
            bonuses.normalize(),
            total_income.normalize()
        ),
    };

    TotalIncomeResult {
        total_income,
        audit_step,
    }
}

/// Divides the total income over the reference period.
///
/// A zero-month period yields zero and [`Diagnostic::ZeroPeriod`].
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::calculate_average_monthly;
/// use vacation_pay::models::Diagnostic;
/// use rust_decimal::Decimal;
///
/// let result = calculate_average_monthly(Decimal::new(600, 0), 3, 2);
/// assert_eq!(result.value, Decimal::new(200, 0));
/// assert!(result.diagnostic.is_none());
///
/// let result = calculate_average_monthly(Decimal::new(600, 0), 0, 2);
/// assert_eq!(result.value, Decimal::ZERO);
/// assert_eq!(result.diagnostic, Some(Diagnostic::ZeroPeriod));
/// ```
pub fn calculate_average_monthly(
    total_income: Decimal,
    months_count: u32,
    step_number: u32,
) -> AverageResult {
    let (value, diagnostic) = if months_count == 0 {
        (Decimal::ZERO, Some(Diagnostic::ZeroPeriod))
    } else {
        (safe_div(total_income, Decimal::from(months_count)), None)
    };

    let reasoning = match diagnostic {
        Some(d) => format!("{} - average monthly income set to 0", d),
        None => format!(
            "{} / {} = {}",
            total_income.normalize(),
            months_count,
            value.round_dp(2)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "avg_monthly".to_string(),
        rule_name: "Average Monthly Income".to_string(),
        input: serde_json::json!({
            "total_income": total_income.normalize().to_string(),
            "months_count": months_count
        }),
        output: serde_json::json!({
            "avg_monthly": value.normalize().to_string()
        }),
        reasoning,
    };

    AverageResult {
        value,
        diagnostic,
        audit_step,
    }
}

/// Divides the average monthly income by the days-per-month convention.
///
/// A zero divisor yields zero and [`Diagnostic::ZeroDailyDivisor`].
pub fn calculate_average_daily(
    avg_monthly: Decimal,
    daily_divisor: Decimal,
    step_number: u32,
) -> AverageResult {
    let (value, diagnostic) = if daily_divisor.is_zero() {
        (Decimal::ZERO, Some(Diagnostic::ZeroDailyDivisor))
    } else {
        (safe_div(avg_monthly, daily_divisor), None)
    };

    let reasoning = match diagnostic {
        Some(d) => format!("{} - average daily income set to 0", d),
        None => format!(
            "{} / {} = {}",
            avg_monthly.round_dp(2),
            daily_divisor.normalize(),
            value.round_dp(2)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "avg_daily".to_string(),
        rule_name: "Average Daily Income".to_string(),
        input: serde_json::json!({
            "avg_monthly": avg_monthly.normalize().to_string(),
            "daily_divisor": daily_divisor.normalize().to_string()
        }),
        output: serde_json::json!({
            "avg_daily": value.normalize().to_string()
        }),
        reasoning,
    };

    AverageResult {
        value,
        diagnostic,
        audit_step,
    }
}

/// Multiplies the payable days by the average daily income.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_vacation_pay(10, Decimal::new(1250, 2), 4);
/// assert_eq!(result.vacation_pay, Decimal::new(125, 0));
/// ```
pub fn calculate_vacation_pay(
    paid_days: u32,
    avg_daily: Decimal,
    step_number: u32,
) -> VacationPayResult {
    let vacation_pay = Decimal::from(paid_days).saturating_mul(avg_daily);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
        input: serde_json::json!({
            "paid_days": paid_days,
            "avg_daily": avg_daily.normalize().to_string()
        }),
        output: serde_json::json!({
            "vacation_pay": vacation_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} days x {} = {}",
            paid_days,
            avg_daily.round_dp(2),
            vacation_pay.round_dp(2)
        ),
    };

    VacationPayResult {
        vacation_pay,
        audit_step,
    }
}

/// Division that saturates instead of panicking when the quotient overflows.
fn safe_div(dividend: Decimal, divisor: Decimal) -> Decimal {
    dividend.checked_div(divisor).unwrap_or(Decimal::MAX)
}
