//! Configuration for the rules engine.
//!
//! Settings are plain serde structs so they can be embedded in a larger
//! TOML file or loaded on their own with [`RulesConfig::load`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for static piece evaluation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EvalConfig {
    /// Adds a bonus for every opposing piece this piece can legally capture.
    /// Off by default.
    #[serde(default)]
    pub threat_bonus: bool,
    /// Fraction of a threatened piece's value added as bonus. Defaults to 0.01.
    #[serde(default = "default_threat_scale")]
    pub threat_scale: f64,
    /// Fraction used instead when the threatened piece is a king. Defaults to 0.001.
    #[serde(default = "default_king_threat_scale")]
    pub king_threat_scale: f64,
}

fn default_threat_scale() -> f64 {
    0.01
}

fn default_king_threat_scale() -> f64 {
    0.001
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            threat_bonus: false,
            threat_scale: default_threat_scale(),
            king_threat_scale: default_king_threat_scale(),
        }
    }
}

impl EvalConfig {
    /// Default settings with the threat bonus switched on.
    pub fn with_threat_bonus() -> Self {
        EvalConfig {
            threat_bonus: true,
            ..Self::default()
        }
    }
}

/// Top-level rules engine configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RulesConfig {
    /// Maximum number of memoised check answers kept by a [`Board`](crate::Board)
    /// before its cache is flushed. Defaults to 4096.
    #[serde(default = "default_check_cache_capacity")]
    pub check_cache_capacity: usize,
    #[serde(default)]
    pub eval: EvalConfig,
}

fn default_check_cache_capacity() -> usize {
    4096
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            check_cache_capacity: default_check_cache_capacity(),
            eval: EvalConfig::default(),
        }
    }
}

impl RulesConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from disk.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "check_cache_capacity must be greater than zero".to_string(),
            ));
        }
        for (name, value) in [
            ("eval.threat_scale", self.eval.threat_scale),
            ("eval.king_threat_scale", self.eval.king_threat_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
