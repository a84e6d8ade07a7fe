use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::ConfigError;
use crate::logging::TracingConfig;

/// Startup configuration for the composition core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Catalog descriptor file (`.ron` / `.json`); stock tunables when unset
    pub catalog_path: Option<PathBuf>,
    /// Roster size above which towers are ticked in parallel
    pub parallel_threshold: usize,
    pub tracing: TracingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            tracing: TracingConfig::default(),
        }
    }
}

impl CoreConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a `.ron` or `.json` config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}
