//! The recompute pipeline.
//!
//! [`recompute`] turns a [`CalculationInput`] snapshot into a [`Recomputation`]:
//! the normalized input, every derived figure, the diagnostics and the audit
//! trace. It is a pure function of its arguments; the caller owns the session
//! state and decides when to call it.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineSettings;
use crate::models::{
    AuditStep, AuditTrace, CalculationInput, CalculationOutput, Diagnostic, Recomputation,
};

use super::income::{
    calculate_average_daily, calculate_average_monthly, calculate_total_income,
    calculate_vacation_pay,
};
use super::paid_days::{PaidDayBreakdown, paid_day_breakdown};

/// Recomputes every derived figure from an input snapshot.
///
/// Steps, in order:
///
/// 1. Clamp `months_count` into `[1, settings.max_months]` and resize the income
///    list to match (kept by index, zero-filled, truncated).
/// 2. Coerce negative amounts to zero.
/// 3. Total income, average monthly income, average daily income.
/// 4. Payable days: counted from the date range when `auto_days` is set (a missing
///    date keeps the previous count and raises a diagnostic), otherwise taken as
///    entered.
/// 5. Vacation pay.
///
/// Never fails. Problems are reported as [`Diagnostic`]s and the affected
/// figures fall back to zero.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::recompute;
/// use vacation_pay::config::EngineSettings;
/// use vacation_pay::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let mut input = CalculationInput::default();
/// input.months_count = 3;
/// input.monthly_incomes = vec![Decimal::new(100, 0), Decimal::new(200, 0), Decimal::new(300, 0)];
/// input.bonuses = Decimal::new(50, 0);
/// input.paid_days = 10;
///
/// let result = recompute(&input, &EngineSettings::default());
/// assert_eq!(result.output.total_income, Decimal::new(650, 0));
/// assert!(result.diagnostics.is_empty());
/// ```
pub fn recompute(input: &CalculationInput, settings: &EngineSettings) -> Recomputation {
    let mut normalized = input.clone();
    let mut diagnostics = Vec::new();
    let mut trace = AuditTrace::default();

    let months_count = settings.clamp_months(input.months_count);
    let months_resized = normalized.resize_months(months_count);
    if months_resized {
        debug!(
            requested = input.months_count,
            months_count,
            previous_len = input.monthly_incomes.len(),
            "Resized monthly incomes"
        );
    }

    for income in &mut normalized.monthly_incomes {
        *income = (*income).max(Decimal::ZERO);
    }
    normalized.bonuses = normalized.bonuses.max(Decimal::ZERO);
    normalized.daily_divisor = normalized.daily_divisor.max(Decimal::ZERO);

    let total = calculate_total_income(
        &normalized.monthly_incomes,
        normalized.bonuses,
        trace.next_step_number(),
    );
    trace.push(total.audit_step);

    let avg_monthly =
        calculate_average_monthly(total.total_income, months_count, trace.next_step_number());
    trace.push(avg_monthly.audit_step);
    diagnostics.extend(avg_monthly.diagnostic);

    let avg_daily = calculate_average_daily(
        avg_monthly.value,
        normalized.daily_divisor,
        trace.next_step_number(),
    );
    trace.push(avg_daily.audit_step);
    diagnostics.extend(avg_daily.diagnostic);

    if normalized.auto_days {
        if normalized.start_date.is_some() && normalized.end_date.is_some() {
            let breakdown = paid_day_breakdown(
                normalized.start_date,
                normalized.end_date,
                &normalized.holidays,
            );
            trace.push(auto_days_step(
                &normalized,
                &breakdown,
                trace.next_step_number(),
            ));
            normalized.paid_days = breakdown.paid_days;
        } else {
            debug!(
                paid_days = normalized.paid_days,
                "Automatic day count skipped, keeping previous value"
            );
            diagnostics.push(Diagnostic::MissingDatesForAutoCount);
        }
    }

    let vacation = calculate_vacation_pay(
        normalized.paid_days,
        avg_daily.value,
        trace.next_step_number(),
    );
    trace.push(vacation.audit_step);

    let output = CalculationOutput {
        total_income: total.total_income,
        avg_monthly: avg_monthly.value,
        avg_daily: avg_daily.value,
        vacation_pay: vacation.vacation_pay,
        paid_days: normalized.paid_days,
    };

    debug!(
        months_count,
        paid_days = output.paid_days,
        total_income = %output.total_income,
        vacation_pay = %output.vacation_pay,
        diagnostics = diagnostics.len(),
        "Recomputed vacation pay"
    );

    Recomputation {
        input: normalized,
        output,
        diagnostics,
        months_resized,
        audit_trace: trace,
    }
}

fn auto_days_step(
    input: &CalculationInput,
    breakdown: &PaidDayBreakdown,
    step_number: u32,
) -> AuditStep {
    let date_text = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.to_string()).unwrap_or_default()
    };

    AuditStep {
        step_number,
        rule_id: "paid_days".to_string(),
        rule_name: "Automatic Paid Day Count".to_string(),
        input: serde_json::json!({
            "start_date": date_text(input.start_date),
            "end_date": date_text(input.end_date),
            "holidays": input.holidays.len()
        }),
        output: serde_json::json!({
            "calendar_days": breakdown.calendar_days,
            "rest_days": breakdown.rest_days,
            "holidays": breakdown.holidays,
            "paid_days": breakdown.paid_days
        }),
        reasoning: format!(
            "{} calendar days - {} Sundays - {} holidays = {} paid days",
            breakdown.calendar_days, breakdown.rest_days, breakdown.holidays, breakdown.paid_days
        ),
    }
}
