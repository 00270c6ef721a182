//! Shared state for the vacation pay API.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineSettings};

/// Shared application state.
///
/// Holds the engine settings every handler calculates with. Requests carry the
/// rest of the calculation input, so nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates application state from validated settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

impl From<ConfigLoader> for AppState {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_settings())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
