//! Input coercion.
//!
//! Form fields arrive as half-typed text or loosely-typed numbers. These helpers
//! turn them into the engine's numeric types under one uniform policy: anything
//! invalid, non-finite or negative becomes zero. No diagnostic is raised, so a user
//! in the middle of typing never sees an error for it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use std::str::FromStr;

/// Converts a float to a non-negative amount.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::amount_from_f64;
/// use rust_decimal::Decimal;
///
/// assert_eq!(amount_from_f64(1500.5), Decimal::new(15005, 1));
/// assert_eq!(amount_from_f64(-3.0), Decimal::ZERO);
/// assert_eq!(amount_from_f64(f64::NAN), Decimal::ZERO);
/// assert_eq!(amount_from_f64(f64::INFINITY), Decimal::ZERO);
/// ```
pub fn amount_from_f64(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Parses a text field into a non-negative amount.
///
/// Surrounding whitespace is ignored and the first comma is read as a decimal
/// point, so `"1500,50"` and `"1500.50"` are the same amount. Exponent notation
/// such as `"1e3"` is accepted.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::amount_from_text;
/// use rust_decimal::Decimal;
///
/// assert_eq!(amount_from_text("1500,50"), Decimal::new(150050, 2));
/// assert_eq!(amount_from_text(" 42 "), Decimal::new(42, 0));
/// assert_eq!(amount_from_text("abc"), Decimal::ZERO);
/// assert_eq!(amount_from_text("-10"), Decimal::ZERO);
/// assert_eq!(amount_from_text("1_000"), Decimal::ZERO);
/// ```
pub fn amount_from_text(text: &str) -> Decimal {
    let normalized = text.trim().replacen(',', ".", 1);
    // Digit separators are not part of a typed amount.
    if normalized.is_empty() || normalized.contains('_') {
        return Decimal::ZERO;
    }
    match Decimal::from_str(&normalized) {
        Ok(value) => value.max(Decimal::ZERO),
        Err(_) => normalized
            .parse::<f64>()
            .map(amount_from_f64)
            .unwrap_or(Decimal::ZERO),
    }
}

/// Converts a float to a whole count, flooring and clamping at zero.
///
/// Values beyond `u32::MAX` saturate.
pub fn count_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}

/// Parses a text field into a whole count, flooring and clamping at zero.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::count_from_text;
///
/// assert_eq!(count_from_text("6.9"), 6);
/// assert_eq!(count_from_text("-2"), 0);
/// assert_eq!(count_from_text(""), 0);
/// ```
pub fn count_from_text(text: &str) -> u32 {
    amount_from_text(text)
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Parses a calendar date, dropping any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, optionally followed by `T` or a space and a time of day
/// in any form (`Z`, offsets and fractional seconds included). The calendar date
/// is taken as written, without timezone conversion. Returns `None` for anything
/// else, including an empty field.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
/// assert_eq!(parse_date("2024-03-15"), expected);
/// assert_eq!(parse_date("2024-03-15T23:59:00"), expected);
/// assert_eq!(parse_date("2024-03-15T10:00:00.000Z"), expected);
/// assert_eq!(parse_date(""), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = match text.as_bytes().get(DATE_LEN) {
        None => text,
        Some(b'T' | b' ') => text.get(..DATE_LEN)?,
        Some(_) => return None,
    };
    if date_part.len() != DATE_LEN {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Length of `YYYY-MM-DD`.
const DATE_LEN: usize = 10;
