//! Configuration management

use crate::domain::tracker::SessionOptions;
use crate::error::{Result, TagtrackError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Language tags of documents the engine tracks
    pub languages: Vec<String>,

    /// Whether the auto-close convenience is enabled
    pub auto_close: bool,

    /// Quiet period of the suggestion-state debouncer, in milliseconds
    pub debounce_ms: u64,

    pub created: DateTime<Utc>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            languages: vec!["html".to_string()],
            auto_close: true,
            debounce_ms: 150,
            created: Utc::now(),
        }
    }
}

impl TrackerConfig {
    /// Load config from .tagtrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagtrack").join("config.toml");
        let contents = fs::read_to_string(&config_path)?;

        toml::from_str(&contents)
            .map_err(|e| TagtrackError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Load config from the given directory, falling back to defaults when
    /// no config file exists
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagtrack").join("config.toml");
        if config_path.exists() {
            Self::load_from_dir(path)
        } else {
            Ok(TrackerConfig::default())
        }
    }

    /// Save config to .tagtrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(".tagtrack");
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagtrackError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// True iff a document with this language tag is tracked
    pub fn is_eligible_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Session options derived from this config
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            languages: self.languages.clone(),
            auto_close: self.auto_close,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}
