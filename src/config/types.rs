//! Configuration types for the vacation pay engine.
//!
//! This module contains the strongly-typed settings that are deserialized from
//! the YAML configuration file, together with their defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Smallest reference period the engine accepts, in months.
pub const MIN_MONTHS_COUNT: u32 = 1;

/// Default upper bound for the reference period, in months.
pub const MAX_MONTHS_COUNT: u32 = 36;

/// Reference period used after a reset, in months.
pub const DEFAULT_MONTHS_COUNT: u32 = 12;

/// The default average number of days per month (25.3).
pub fn default_daily_divisor() -> Decimal {
    Decimal::new(253, 1)
}

const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display names for the twelve months, January first.
///
/// # Example
///
/// ```
/// use vacation_pay::config::MonthNames;
///
/// let names = MonthNames::default();
/// assert_eq!(names.get(0), "January");
/// assert_eq!(names.get(11), "December");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthNames([String; 12]);

impl MonthNames {
    /// Creates a set of month names, January first.
    pub fn new(names: [String; 12]) -> Self {
        Self(names)
    }

    /// Returns the name for a zero-based month index. Indices wrap modulo 12.
    pub fn get(&self, month0: usize) -> &str {
        &self.0[month0 % 12]
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self(ENGLISH_MONTH_NAMES.map(String::from))
    }
}

/// Engine settings.
///
/// Every field is optional in YAML and falls back to its default.
///
/// ```yaml
/// daily_divisor: "25.3"
/// default_months: 12
/// max_months: 36
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Average number of days per month.
    pub daily_divisor: Decimal,
    /// Reference period length after a reset.
    pub default_months: u32,
    /// Longest reference period accepted; longer periods are clamped.
    pub max_months: u32,
    /// Names used for month labels.
    pub month_names: MonthNames,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            daily_divisor: default_daily_divisor(),
            default_months: DEFAULT_MONTHS_COUNT,
            max_months: MAX_MONTHS_COUNT,
            month_names: MonthNames::default(),
        }
    }
}

impl EngineSettings {
    /// Checks that the settings describe a usable engine.
    ///
    /// A zero divisor is allowed: the engine reports it as a diagnostic at
    /// calculation time instead.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_divisor < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "daily_divisor".to_string(),
                message: format!("must not be negative, got {}", self.daily_divisor),
            });
        }
        if !(MIN_MONTHS_COUNT..=MAX_MONTHS_COUNT).contains(&self.max_months) {
            return Err(EngineError::InvalidConfig {
                field: "max_months".to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_MONTHS_COUNT, MAX_MONTHS_COUNT, self.max_months
                ),
            });
        }
        if !(MIN_MONTHS_COUNT..=self.max_months).contains(&self.default_months) {
            return Err(EngineError::InvalidConfig {
                field: "default_months".to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_MONTHS_COUNT, self.max_months, self.default_months
                ),
            });
        }
        Ok(())
    }

    /// Clamps a requested period length into `[1, max_months]`.
    ///
    /// `max_months` itself never counts above [`MAX_MONTHS_COUNT`], even when the
    /// settings were built without [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_pay::config::EngineSettings;
    ///
    /// let settings = EngineSettings::default();
    /// assert_eq!(settings.clamp_months(0), 1);
    /// assert_eq!(settings.clamp_months(12), 12);
    /// assert_eq!(settings.clamp_months(100), 36);
    /// ```
    pub fn clamp_months(&self, requested: u32) -> u32 {
        let max = self.max_months.clamp(MIN_MONTHS_COUNT, MAX_MONTHS_COUNT);
        requested.clamp(MIN_MONTHS_COUNT, max)
    }
}
