//! Configuration schema types
//!
//! This module defines the configuration structure that maps to
//! `tabmask.toml`. Every section is optional.

use crate::adapters::csv::delimiter_byte;
use crate::anonymization::AnonymizationConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Tabmask configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabmaskConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input parsing settings
    #[serde(default)]
    pub input: InputConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Anonymization engine settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TabmaskConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.anonymization
            .validate()
            .map_err(|e| format!("anonymization: {e:#}"))?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (report only, no output written)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field delimiter, a single ASCII character (`\t` for tab)
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// Delimiter as a byte, comma when invalid
    pub fn delimiter_byte(&self) -> u8 {
        delimiter_byte(&self.delimiter).unwrap_or(b',')
    }

    fn validate(&self) -> Result<(), String> {
        validate_delimiter("input.delimiter", &self.delimiter)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for anonymized files; next to the input when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Field delimiter for written files
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Suffix appended to the input file stem
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            delimiter: default_delimiter(),
            suffix: default_suffix(),
        }
    }
}

impl OutputConfig {
    /// Delimiter as a byte, comma when invalid
    pub fn delimiter_byte(&self) -> u8 {
        delimiter_byte(&self.delimiter).unwrap_or(b',')
    }

    fn validate(&self) -> Result<(), String> {
        validate_delimiter("output.delimiter", &self.delimiter)?;

        if self
            .suffix
            .chars()
            .any(|c| std::path::is_separator(c) || c.is_control())
        {
            return Err(format!(
                "output.suffix '{}' must not contain path separators",
                self.suffix
            ));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_delimiter(field: &str, value: &str) -> Result<(), String> {
    match delimiter_byte(value) {
        Some(_) => Ok(()),
        None => Err(format!(
            "Invalid {field} '{value}'. Must be a single ASCII character or \\t"
        )),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_suffix() -> String {
    "_anonymized".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
