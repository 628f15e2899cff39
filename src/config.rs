//! Configuration management for Sonar.
//!
//! A small TOML file in the platform config directory holds the tracker
//! endpoint. API tokens are stored separately in the OS keyring.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory under the platform config dir.
const CONFIG_DIR: &str = "sonar";

/// The configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Creating the config directory failed.
    #[error("failed to create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// Reading the config file failed.
    #[error("failed to read configuration file: {0}")]
    ReadError(std::io::Error),

    /// Writing the config file failed.
    #[error("failed to write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The config file is not valid TOML.
    #[error("configuration file is invalid: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Serializing the config failed.
    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the bug tracker instance.
    pub tracker_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker_url: crate::api::client::OPENRADAR_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    ///
    /// A missing file is not an error: the defaults are returned so first
    /// runs work without any setup.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(ConfigError::ReadError)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Save the configuration to disk, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let raw = toml::to_string_pretty(self)?;
        fs::write(&path, raw).map_err(ConfigError::WriteError)
    }
}

/// The path of the configuration file.
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
}
