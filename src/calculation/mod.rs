//! Calculation logic for the vacation pay engine.
//!
//! This module contains the input coercion adapter, the income formulas, payable
//! day counting over a date range, month labels for the reference period, and the
//! [`recompute`] pipeline that ties them together.

mod coercion;
mod engine;
mod income;
mod month_labels;
mod paid_days;

pub use coercion::{amount_from_f64, amount_from_text, count_from_f64, count_from_text, parse_date};
pub use engine::recompute;
pub use income::{
    AverageResult, TotalIncomeResult, VacationPayResult, calculate_average_daily,
    calculate_average_monthly, calculate_total_income, calculate_vacation_pay,
};
pub use month_labels::generate_labels;
pub use paid_days::{
    PaidDayBreakdown, REST_DAY, count_paid_days, count_paid_days_iterative, is_payable_day,
    paid_day_breakdown,
};
