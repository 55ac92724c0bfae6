//! Domain error types
//!
//! This module defines the error hierarchy for Tabmask.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Tabmask error type
///
/// This is the primary error type used throughout the application.
/// Per-cell transform problems never surface here: they fall back to the
/// original value inside the engine.
#[derive(Debug, Error)]
pub enum TabmaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input could not be parsed into a table
    #[error("Failed to parse CSV: {0}")]
    Parse(String),

    /// Anonymization run errors (audit log, engine setup)
    #[error("Anonymization error: {0}")]
    Anonymization(String),

    /// Writing the anonymized table failed
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TabmaskError {
    fn from(err: std::io::Error) -> Self {
        TabmaskError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TabmaskError {
    fn from(err: serde_json::Error) -> Self {
        TabmaskError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TabmaskError {
    fn from(err: toml::de::Error) -> Self {
        TabmaskError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors raised while reading input
impl From<csv::Error> for TabmaskError {
    fn from(err: csv::Error) -> Self {
        TabmaskError::Parse(err.to_string())
    }
}

impl From<anyhow::Error> for TabmaskError {
    fn from(err: anyhow::Error) -> Self {
        TabmaskError::Anonymization(format!("{err:#}"))
    }
}
