//! Typed configuration for the pet backend.
//!
//! The canonical configuration lives in `menagerie.yaml` at the project
//! root. This module defines strongly-typed structs mirroring the YAML
//! structure and a loader that reads the file. Every field has a default,
//! so a missing or partial file still yields a usable configuration.

use std::path::Path;

use menagerie_types::{DEFAULT_HAPPINESS, DEFAULT_HUNGER};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Baselines stamped onto freshly created pets.
    #[serde(default)]
    pub pets: PetCreationDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Yaml`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&text)?)
    }
}

/// Baselines a pet is created with; both timestamps are stamped at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PetCreationDefaults {
    /// Starting hunger baseline.
    #[serde(default = "default_hunger")]
    pub hunger: i64,
    /// Starting happiness baseline.
    #[serde(default = "default_happiness")]
    pub happiness: i64,
}

impl Default for PetCreationDefaults {
    fn default() -> Self {
        Self {
            hunger: DEFAULT_HUNGER,
            happiness: DEFAULT_HAPPINESS,
        }
    }
}

const fn default_hunger() -> i64 {
    DEFAULT_HUNGER
}

const fn default_happiness() -> i64 {
    DEFAULT_HAPPINESS
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
