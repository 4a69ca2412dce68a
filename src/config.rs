//! Configuration for the Qubic shell.

use derive_getters::Getters;
use derive_more::{Display, Error};
use qubic_rules::STANDARD_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest accepted board edge length.
pub const MAX_SIZE: usize = 32;

/// Top-level configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QubicConfig {
    /// Board edge length.
    #[serde(default = "default_size")]
    size: usize,

    /// How typed coordinates are interpreted.
    #[serde(default)]
    input: InputConfig,

    /// How snapshots are printed.
    #[serde(default)]
    output: OutputConfig,
}

/// Input adapter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct InputConfig {
    /// Treat typed numbers as 1-based.
    #[serde(default)]
    one_based: bool,

    /// Clamp typed numbers into the board range instead of rejecting them.
    #[serde(default)]
    clamp: bool,
}

impl InputConfig {
    /// Creates input settings.
    pub fn new(one_based: bool, clamp: bool) -> Self {
        Self { one_based, clamp }
    }
}

/// Snapshot output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    format: OutputFormat,
}

/// Snapshot output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Board slices as text.
    #[default]
    Text,
    /// The full snapshot as JSON.
    Json,
}

fn default_size() -> usize {
    STANDARD_SIZE
}

impl Default for QubicConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl QubicConfig {
    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides. Flags only ever switch options on.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        one_based: bool,
        clamp: bool,
        json: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.size = size;
        }
        self.input.one_based |= one_based;
        self.input.clamp |= clamp;
        if json {
            self.output.format = OutputFormat::Json;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_SIZE, self.size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
