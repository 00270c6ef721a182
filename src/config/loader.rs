//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine settings
//! from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

/// Loads and provides access to engine settings.
///
/// # Example
///
/// ```no_run
/// use vacation_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vacation_pay.yaml").unwrap();
/// println!("Daily divisor: {}", loader.settings().daily_divisor);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: EngineSettings,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown value types
    /// - The settings fail validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vacation_pay::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/vacation_pay.yaml")?;
    /// # Ok::<(), vacation_pay::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings = Self::load_yaml::<EngineSettings>(path.as_ref())?;
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> EngineSettings {
        self.settings
    }
}
