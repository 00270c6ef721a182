//! Request types for the vacation pay API.
//!
//! Requests mirror what a form holds: numeric fields may be sent as JSON numbers
//! or as the raw text the user typed, and dates as text. Conversion into the
//! engine's types goes through the coercion adapter, once per field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    amount_from_f64, amount_from_text, count_from_f64, count_from_text, parse_date,
};
use crate::config::EngineSettings;
use crate::models::{CalculationInput, HolidaySet};

/// A numeric form field: either a JSON number or typed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(f64),
    /// Text as typed, e.g. `"1500,50"`.
    Text(String),
}

impl FieldValue {
    /// Coerces the field to a non-negative amount.
    pub fn to_amount(&self) -> Decimal {
        match self {
            FieldValue::Number(n) => amount_from_f64(*n),
            FieldValue::Text(s) => amount_from_text(s),
        }
    }

    /// Coerces the field to a whole non-negative count.
    pub fn to_count(&self) -> u32 {
        match self {
            FieldValue::Number(n) => count_from_f64(*n),
            FieldValue::Text(s) => count_from_text(s),
        }
    }
}

/// Holiday dates: a comma-separated string or a list of date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HolidaysField {
    /// `"2024-01-01, 2024-01-07"`
    Text(String),
    /// `["2024-01-01", "2024-01-07"]`
    List(Vec<String>),
}

impl HolidaysField {
    /// Parses the dates, dropping malformed entries.
    pub fn to_set(&self) -> HolidaySet {
        match self {
            HolidaysField::Text(text) => HolidaySet::parse(text),
            HolidaysField::List(items) => HolidaySet::parse(&items.join(",")),
        }
    }
}

fn holidays_or_empty(field: Option<&HolidaysField>) -> HolidaySet {
    field.map(HolidaysField::to_set).unwrap_or_default()
}

fn date_or_none(field: Option<&str>) -> Option<chrono::NaiveDate> {
    field.and_then(parse_date)
}

/// Request body for `/recompute` and `/export`.
///
/// Every field is optional; missing fields take their reset value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// Reference period length in months.
    #[serde(default)]
    pub months_count: Option<FieldValue>,
    /// Monthly incomes, oldest first.
    #[serde(default)]
    pub monthly_incomes: Vec<FieldValue>,
    /// Bonuses over the period.
    #[serde(default)]
    pub bonuses: Option<FieldValue>,
    /// Vacation start date.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Vacation end date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Count payable days from the date range.
    #[serde(default)]
    pub auto_days: bool,
    /// Payable days as entered (or the previous automatic count).
    #[serde(default)]
    pub paid_days: Option<FieldValue>,
    /// Non-payable dates.
    #[serde(default)]
    pub holidays: Option<HolidaysField>,
    /// Overrides the configured days-per-month divisor.
    #[serde(default)]
    pub daily_divisor: Option<FieldValue>,
}

impl RecomputeRequest {
    /// Builds the engine input, coercing every field exactly once.
    pub fn to_input(&self, settings: &EngineSettings) -> CalculationInput {
        let defaults = CalculationInput::from_settings(settings);
        CalculationInput {
            months_count: self
                .months_count
                .as_ref()
                .map(FieldValue::to_count)
                .unwrap_or(defaults.months_count),
            monthly_incomes: self.monthly_incomes.iter().map(FieldValue::to_amount).collect(),
            bonuses: self
                .bonuses
                .as_ref()
                .map(FieldValue::to_amount)
                .unwrap_or_default(),
            start_date: date_or_none(self.start_date.as_deref()),
            end_date: date_or_none(self.end_date.as_deref()),
            auto_days: self.auto_days,
            paid_days: self
                .paid_days
                .as_ref()
                .map(FieldValue::to_count)
                .unwrap_or_default(),
            holidays: holidays_or_empty(self.holidays.as_ref()),
            daily_divisor: self
                .daily_divisor
                .as_ref()
                .map(FieldValue::to_amount)
                .unwrap_or(defaults.daily_divisor),
        }
    }
}

/// Request body for `/paid-days`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaidDaysRequest {
    /// First day of the range.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the range, inclusive.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Non-payable dates.
    #[serde(default)]
    pub holidays: Option<HolidaysField>,
}

impl PaidDaysRequest {
    /// The parsed start date, if valid.
    pub fn start(&self) -> Option<chrono::NaiveDate> {
        date_or_none(self.start_date.as_deref())
    }

    /// The parsed end date, if valid.
    pub fn end(&self) -> Option<chrono::NaiveDate> {
        date_or_none(self.end_date.as_deref())
    }

    /// The parsed holiday set.
    pub fn holiday_set(&self) -> HolidaySet {
        holidays_or_empty(self.holidays.as_ref())
    }
}

/// Request body for `/labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelsRequest {
    /// Vacation start date; the last label is its month.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Number of labels to produce.
    #[serde(default)]
    pub months_count: Option<FieldValue>,
}

impl LabelsRequest {
    /// The parsed start date, if valid.
    pub fn start(&self) -> Option<chrono::NaiveDate> {
        date_or_none(self.start_date.as_deref())
    }

    /// The requested label count, zero when missing or invalid.
    pub fn count(&self) -> u32 {
        self.months_count
            .as_ref()
            .map(FieldValue::to_count)
            .unwrap_or(0)
    }
}
