//! Error types for the vacation pay engine.
//!
//! Calculation problems are never errors: they surface as
//! [`Diagnostic`](crate::models::Diagnostic)s next to a complete result. The
//! variants here cover the parts that talk to the outside world, namely
//! configuration loading and CSV export.

use thiserror::Error;

/// The main error type for the vacation pay engine.
///
/// # Example
///
/// ```
/// use vacation_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/vacation_pay.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/vacation_pay.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot work with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Writing the CSV export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
