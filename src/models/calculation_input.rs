//! Calculation input model.
//!
//! This module contains [`CalculationInput`], the snapshot of everything a user has
//! entered into the calculator. The caller owns it and replaces it with the
//! normalized copy returned by each recompute.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{EngineSettings, default_daily_divisor};

use super::HolidaySet;

/// Everything the engine needs to derive income averages and vacation pay.
///
/// `monthly_incomes` is indexed oldest-first: index 0 is the earliest month of the
/// reference period and the last index is the month the vacation starts in.
///
/// # Example
///
/// ```
/// use vacation_pay::models::CalculationInput;
///
/// let input = CalculationInput::default();
/// assert_eq!(input.months_count, 12);
/// assert_eq!(input.monthly_incomes.len(), 12);
/// assert!(!input.auto_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Length of the reference period in months. Clamped by the engine.
    pub months_count: u32,
    /// Income per month of the reference period, oldest first.
    #[serde(default)]
    pub monthly_incomes: Vec<Decimal>,
    /// Bonuses paid over the whole reference period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// First day of the vacation.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the vacation (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Derive `paid_days` from the date range instead of taking it as entered.
    #[serde(default)]
    pub auto_days: bool,
    /// Number of payable vacation days.
    #[serde(default)]
    pub paid_days: u32,
    /// Dates that are never payable.
    #[serde(default)]
    pub holidays: HolidaySet,
    /// Average number of days per month used to turn a monthly average into a daily one.
    #[serde(default = "default_daily_divisor")]
    pub daily_divisor: Decimal,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl CalculationInput {
    /// Creates the reset state for the given settings.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let months_count = settings.default_months.max(1);
        Self {
            months_count,
            monthly_incomes: vec![Decimal::ZERO; months_count as usize],
            bonuses: Decimal::ZERO,
            start_date: None,
            end_date: None,
            auto_days: false,
            paid_days: 0,
            holidays: HolidaySet::new(),
            daily_divisor: settings.daily_divisor,
        }
    }

    /// Restores every field to its reset value in one step.
    pub fn reset(&mut self, settings: &EngineSettings) {
        *self = Self::from_settings(settings);
    }

    /// Sets the period length and resizes `monthly_incomes` to match.
    ///
    /// Values already entered are kept by index. Growing appends zeros,
    /// shrinking drops the trailing months. Returns `true` if the income list
    /// changed length.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_pay::models::CalculationInput;
    /// use rust_decimal::Decimal;
    ///
    /// let mut input = CalculationInput::default();
    /// input.monthly_incomes[0] = Decimal::new(100, 0);
    ///
    /// assert!(input.resize_months(3));
    /// assert_eq!(input.monthly_incomes, vec![Decimal::new(100, 0), Decimal::ZERO, Decimal::ZERO]);
    /// ```
    pub fn resize_months(&mut self, count: u32) -> bool {
        self.months_count = count;
        let before = self.monthly_incomes.len();
        self.monthly_incomes.resize(count as usize, Decimal::ZERO);
        before != self.monthly_incomes.len()
    }

    /// Fills the income slots and bonuses with a worked example.
    ///
    /// Only applies once a start date is set, so month labels line up with the
    /// example figures. Slots beyond the example series are zeroed. Returns `true`
    /// if the example was applied.
    pub fn fill_sample_data(&mut self) -> bool {
        if self.start_date.is_none() {
            return false;
        }
        let sample = sample_monthly_incomes();
        for (i, slot) in self.monthly_incomes.iter_mut().enumerate() {
            *slot = sample.get(i).copied().unwrap_or(Decimal::ZERO);
        }
        self.bonuses = Decimal::new(2_000_000, 0);
        true
    }
}

fn sample_monthly_incomes() -> [Decimal; 12] {
    [
        Decimal::new(81_818_182, 2),
        Decimal::new(1_500_000, 0),
        Decimal::new(3_000_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(3_000_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(3_000_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(1_500_000, 0),
        Decimal::new(1_500_000, 0),
    ]
}
