use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::swipe::{SwipeConfig, SwipeConfigUpdate};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Swipe detector overrides, merged over the detector defaults
    pub swipe: SwipeConfigUpdate,
    /// Derive SlideLeft/SlideRight events from triggered scores
    pub emit_events: bool,
    /// Capacity of the frame and output channels of a swipe stream
    pub stream_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swipe: SwipeConfigUpdate::default(),
            emit_events: true,
            stream_buffer: 64,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    HomeDirNotFound,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl Config {
    /// Detector configuration with this file's overrides applied
    pub fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig::default().merged(&self.swipe)
    }

    /// Load configuration from the default location, creating it with defaults if it doesn't exist
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Reset the default location to the default configuration
    pub fn reset() -> ConfigResult<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    fn get_config_path() -> ConfigResult<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| ConfigError::HomeDirNotFound)?;

        let mut path = PathBuf::from(home);
        path.push(".touchless");
        path.push("config");
        path.push("settings.json");

        Ok(path)
    }
}
