//! Month labels for the reference period.
//!
//! The reference period ends with the month the vacation starts in. Labels are
//! produced oldest-first so they line up index-for-index with
//! `CalculationInput::monthly_incomes`.

use chrono::{Datelike, NaiveDate};

use crate::config::MonthNames;

/// Generates `"{month} {year}"` labels for the `months_count` months ending with
/// the start date's month, oldest first.
///
/// Returns an empty list when `start` is absent or `months_count` is zero.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::generate_labels;
/// use vacation_pay::config::MonthNames;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 15);
/// let labels = generate_labels(start, 3, &MonthNames::default());
/// assert_eq!(labels, vec!["January 2024", "February 2024", "March 2024"]);
/// ```
pub fn generate_labels(
    start: Option<NaiveDate>,
    months_count: u32,
    month_names: &MonthNames,
) -> Vec<String> {
    let Some(start) = start else {
        return Vec::new();
    };
    if months_count == 0 {
        return Vec::new();
    }

    // Months counted from year 0, so year wrap-around is plain integer division.
    let last = i64::from(start.year()) * 12 + i64::from(start.month0());
    let first = last - (i64::from(months_count) - 1);

    (first..=last)
        .map(|index| {
            let year = index.div_euclid(12);
            let month0 = index.rem_euclid(12) as usize;
            format!("{} {}", month_names.get(month0), year)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_labels_within_one_year() {
        let labels = generate_labels(date(2024, 3, 15), 3, &MonthNames::default());
        assert_eq!(labels, vec!["January 2024", "February 2024", "March 2024"]);
    }

    #[test]
    fn test_labels_wrap_into_previous_year() {
        let labels = generate_labels(date(2024, 2, 1), 4, &MonthNames::default());
        assert_eq!(
            labels,
            vec!["November 2023", "December 2023", "January 2024", "February 2024"]
        );
    }

    #[test]
    fn test_twelve_months_end_at_start_month() {
        let labels = generate_labels(date(2024, 6, 30), 12, &MonthNames::default());
        assert_eq!(labels.len(), 12);
        assert_eq!(labels.first().unwrap(), "July 2023");
        assert_eq!(labels.last().unwrap(), "June 2024");
    }

    #[test]
    fn test_thirty_six_months_span_three_years() {
        let labels = generate_labels(date(2024, 1, 10), 36, &MonthNames::default());
        assert_eq!(labels.len(), 36);
        assert_eq!(labels[0], "February 2021");
        assert_eq!(labels[35], "January 2024");
    }

    #[test]
    fn test_single_month_is_start_month() {
        let labels = generate_labels(date(2025, 12, 31), 1, &MonthNames::default());
        assert_eq!(labels, vec!["December 2025"]);
    }

    #[test]
    fn test_no_start_date_is_empty() {
        assert!(generate_labels(None, 12, &MonthNames::default()).is_empty());
    }

    #[test]
    fn test_zero_months_is_empty() {
        assert!(generate_labels(date(2024, 3, 15), 0, &MonthNames::default()).is_empty());
    }

    #[test]
    fn test_custom_month_names() {
        let names = MonthNames::new(
            [
                "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август",
                "сентябрь", "октябрь", "ноябрь", "декабрь",
            ]
            .map(String::from),
        );
        let labels = generate_labels(date(2024, 1, 5), 2, &names);
        assert_eq!(labels, vec!["декабрь 2023", "январь 2024"]);
    }
}
