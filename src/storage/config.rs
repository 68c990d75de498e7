//! Configuration handling
//!
//! Configuration is stored in the platform config directory
//! (`~/.config/gear/config.toml` on Linux). It only holds defaults the
//! command line can override; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Read(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the inventory snapshot lives; None means the platform data dir
    pub data_file: Option<PathBuf>,

    /// Spaces per depth level when rendering trees
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            indent_width: 2,
        }
    }
}

impl Config {
    /// Returns the config file location, if the platform has one
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gear").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user configuration, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
