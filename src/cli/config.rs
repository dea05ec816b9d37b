//! Configuration management for the dojo
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.dojo/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::args::Verbosity;
use crate::errors::{DojoError, Result};

/// Complete configuration for the dojo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values written into the assistant-integration document by `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub learning_mode: String,
    pub teaching_style: String,
    pub intervention_threshold: u32,
    pub hint_level: u32,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub default_verbosity: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            learning_mode: "practice".to_string(),
            teaching_style: "socratic".to_string(),
            intervention_threshold: 3,
            hint_level: 1,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DojoError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate configuration text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| DojoError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// `~/.dojo/config.toml`, if a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".dojo").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.session.learning_mode.trim().is_empty() {
            return Err(DojoError::ConfigError(
                "learning_mode must not be empty".to_string(),
            ));
        }

        if self.session.teaching_style.trim().is_empty() {
            return Err(DojoError::ConfigError(
                "teaching_style must not be empty".to_string(),
            ));
        }

        if self.session.intervention_threshold == 0 {
            return Err(DojoError::ConfigError(
                "intervention_threshold must be greater than 0".to_string(),
            ));
        }

        if self.session.hint_level == 0 {
            return Err(DojoError::ConfigError(
                "hint_level must be at least 1".to_string(),
            ));
        }

        self.verbosity()?;
        Ok(())
    }

    /// Configured default verbosity
    pub fn verbosity(&self) -> Result<Verbosity> {
        self.display
            .default_verbosity
            .parse()
            .map_err(DojoError::ConfigError)
    }
}
