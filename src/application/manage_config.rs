//! Configuration management use case

use std::path::PathBuf;

use crate::error::{Result, TagtrackError};
use crate::infrastructure::TrackerConfig;

pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    pub fn list(&self) -> Result<TrackerConfig> {
        TrackerConfig::load_or_default(&self.root)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let config = TrackerConfig::load_or_default(&self.root)?;
        match key {
            "languages" => Ok(config.languages.join(",")),
            "auto_close" => Ok(config.auto_close.to_string()),
            "debounce_ms" => Ok(config.debounce_ms.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagtrackError::Config(format!("Unknown key: {}", key))),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = TrackerConfig::load_or_default(&self.root)?;
        match key {
            "languages" => {
                let languages: Vec<String> = value
                    .split(',')
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect();
                if languages.is_empty() {
                    return Err(TagtrackError::Config(
                        "languages needs at least one language tag".to_string(),
                    ));
                }
                config.languages = languages;
            }
            "auto_close" => {
                config.auto_close = value.parse().map_err(|_| {
                    TagtrackError::Config(format!("Invalid auto_close value: {}", value))
                })?;
            }
            "debounce_ms" => {
                config.debounce_ms = value.parse().map_err(|_| {
                    TagtrackError::Config(format!("Invalid debounce_ms value: {}", value))
                })?;
            }
            _ => return Err(TagtrackError::Config(format!("Unknown key: {}", key))),
        }
        config.save_to_dir(&self.root)
    }
}
