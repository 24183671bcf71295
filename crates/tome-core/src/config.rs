use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{TomeError, TomeResult};
use crate::search::MAX_RESULTS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TomeConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on a result list. Clamped to the engine's fixed maximum.
    pub max_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Trailing debounce applied to typed terms, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl SessionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl TomeConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("tome")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();

        let mut config = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("failed to parse config: {e}");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read config: {e}");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.search.max_results = self.search.max_results.clamp(1, MAX_RESULTS);
        self.session.debounce_ms = self.session.debounce_ms.min(5000);
    }

    /// Save config to file
    pub fn save(&self) -> TomeResult<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TomeError::Config(format!("failed to serialize config: {e}")))?;
        fs::write(&path, content)?;

        Ok(())
    }
}
