//! Configuration loading and management for the vacation pay engine.
//!
//! This module loads engine settings (daily divisor, period bounds, month names)
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use vacation_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation_pay.yaml").unwrap();
//! println!("Longest period: {} months", config.settings().max_months);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MONTHS_COUNT, EngineSettings, MAX_MONTHS_COUNT, MIN_MONTHS_COUNT, MonthNames,
    default_daily_divisor,
};
