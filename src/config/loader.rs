use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, FactMode};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/countrydex/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("countrydex").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The source URL and field list are non-empty
    /// - Page size and note cap are at least 1
    /// - An API key is present when facts come from an LLM
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.url must not be empty".to_string(),
            });
        }

        if self.source.fields.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.fields must list at least one field".to_string(),
            });
        }

        if self.directory.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "directory.page_size must be at least 1".to_string(),
            });
        }

        if self.favorites.note_max_chars == 0 {
            return Err(ConfigError::ValidationError {
                message: "favorites.note_max_chars must be at least 1".to_string(),
            });
        }

        if self.favorites.storage_key.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "favorites.storage_key must not be empty".to_string(),
            });
        }

        let has_key = self
            .facts
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if self.facts.mode == FactMode::Llm && !has_key {
            return Err(ConfigError::ValidationError {
                message: "facts.api_key is required when facts.mode = \"llm\"".to_string(),
            });
        }

        Ok(())
    }
}
