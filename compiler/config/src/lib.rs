#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Atlas Configuration
//!
//! Loads and saves the user's configuration file, which holds:
//! - Preferences (chain, provider, snippet language and library)
//! - Logging configuration
//! - The location of the provider capability dataset
//!
//! Configuration is stored in TOML format. Every section is optional; a
//! missing file falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{Chain, Language, Library, Provider, Target, TargetError};

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// The stored language and library do not pair up
    #[error("Invalid snippet target: {0}")]
    Target(#[from] TargetError),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Persisted user preferences
    #[serde(default)]
    pub preferences: Preferences,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Last-used selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
    /// Selected provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Snippet language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Snippet library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<Library>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional, stderr otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string(), file: None } }
}

/// Data file locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Provider capability dataset; the bundled one is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/atlas/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("atlas");
        Ok(config_dir.join("config.toml"))
    }

    /// Load `path` if given, otherwise the default path.
    ///
    /// An explicit path must exist. A missing file at the default path (or
    /// no config directory at all) yields [`Config::default`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::from_file(path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Snippet target from the stored preferences.
    pub fn target(&self) -> Result<Target, ConfigError> { self.preferences.target() }
}

impl Preferences {
    /// Snippet target from the language and library.
    ///
    /// A language alone selects its default library; a library alone
    /// implies its language; neither gives the raw envelope.
    pub fn target(&self) -> Result<Target, ConfigError> {
        let target = match (self.language, self.library) {
            (None, None) => Target::default(),
            (Some(language), None) => Target::for_library(language.default_library()),
            (None, Some(library)) => Target::for_library(library),
            (Some(language), Some(library)) => Target::new(language, library)?,
        };
        Ok(target)
    }
}
