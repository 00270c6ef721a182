//! Holiday exceptions.
//!
//! This module contains the [`HolidaySet`] type: explicit calendar dates that are
//! never payable, whatever weekday they fall on.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered set of non-payable calendar dates.
///
/// Dates are compared by exact year-month-day equality; there are no ranges.
///
/// # Example
///
/// ```
/// use vacation_pay::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse("2024-01-01, 2024-01-07, not-a-date");
/// assert_eq!(holidays.len(), 2);
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list of `YYYY-MM-DD` dates.
    ///
    /// Entries are trimmed. Anything that is not a strict, valid `YYYY-MM-DD` date
    /// is dropped without complaint, so half-typed input never blocks a recompute.
    pub fn parse(text: &str) -> Self {
        text.split(',')
            .map(str::trim)
            .filter_map(parse_strict_iso_date)
            .collect()
    }

    /// Adds a date. Returns `false` if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    /// Returns `true` if the date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    /// Iterates the holidays within `[start, end]` inclusive, ascending.
    ///
    /// Yields nothing when `end < start`.
    pub fn in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0
            .range(start..)
            .take_while(move |date| **date <= end)
            .copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn parse_strict_iso_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}
