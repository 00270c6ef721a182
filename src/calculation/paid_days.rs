//! Payable day counting.
//!
//! This module counts the vacation days in an inclusive date range that are paid:
//! every calendar day except the weekly rest day (Sunday) and explicit holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidaySet;

/// The weekly rest day, never payable.
pub const REST_DAY: Weekday = Weekday::Sun;

/// Returns `true` if the date is neither the rest day nor a holiday.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::is_payable_day;
/// use vacation_pay::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse("2024-03-08");
/// // 2024-03-07 is a Thursday, 2024-03-10 a Sunday
/// assert!(is_payable_day(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(), &holidays));
/// assert!(!is_payable_day(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(), &holidays));
/// assert!(!is_payable_day(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), &holidays));
/// ```
pub fn is_payable_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    date.weekday() != REST_DAY && !holidays.contains(date)
}

/// How the days of a range were classified.
///
/// `calendar_days == paid_days + rest_days + holidays`; a holiday falling on the
/// rest day is counted once, as a rest day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidDayBreakdown {
    /// Days in the range, inclusive.
    pub calendar_days: u32,
    /// Rest days in the range.
    pub rest_days: u32,
    /// Holidays in the range that are not rest days.
    pub holidays: u32,
    /// Payable days.
    pub paid_days: u32,
}

/// Classifies every day of `[start, end]` without walking the range.
///
/// Full weeks contribute six payable days each; the leftover days are looked up by
/// weekday, then in-range holidays that are not already rest days are removed.
/// An absent date or `end < start` yields an all-zero breakdown.
pub fn paid_day_breakdown(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    holidays: &HolidaySet,
) -> PaidDayBreakdown {
    let (Some(start), Some(end)) = (start, end) else {
        return PaidDayBreakdown::default();
    };
    if end < start {
        return PaidDayBreakdown::default();
    }

    let calendar_days = end.signed_duration_since(start).num_days() + 1;
    let full_weeks = calendar_days / 7;
    let leftover = calendar_days % 7;

    let first = i64::from(start.weekday().num_days_from_sunday());
    let rest = i64::from(REST_DAY.num_days_from_sunday());
    let leftover_rest = (0..leftover)
        .filter(|offset| (first + offset) % 7 == rest)
        .count() as i64;
    let rest_days = full_weeks + leftover_rest;

    let holiday_days = holidays
        .in_range(start, end)
        .filter(|date| date.weekday() != REST_DAY)
        .count() as i64;

    let paid_days = calendar_days - rest_days - holiday_days;

    PaidDayBreakdown {
        calendar_days: saturate(calendar_days),
        rest_days: saturate(rest_days),
        holidays: saturate(holiday_days),
        paid_days: saturate(paid_days),
    }
}

/// Counts the payable days in `[start, end]` inclusive.
///
/// Returns 0 when either date is absent or `end < start`.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::count_paid_days;
/// use vacation_pay::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// // Monday 2024-03-04 to Sunday 2024-03-17, with International Women's Day off
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4);
/// let end = NaiveDate::from_ymd_opt(2024, 3, 17);
/// let holidays = HolidaySet::parse("2024-03-08");
///
/// assert_eq!(count_paid_days(start, end, &holidays), 11);
/// assert_eq!(count_paid_days(end, start, &holidays), 0);
/// assert_eq!(count_paid_days(start, None, &holidays), 0);
/// ```
pub fn count_paid_days(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    holidays: &HolidaySet,
) -> u32 {
    paid_day_breakdown(start, end, holidays).paid_days
}

/// Counts payable days by visiting every day of the range in order.
///
/// The reference definition [`count_paid_days`] must agree with.
pub fn count_paid_days_iterative(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    holidays: &HolidaySet,
) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let count = start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| is_payable_day(*date, holidays))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
