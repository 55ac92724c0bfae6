//! Configuration management for Tabmask.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Tabmask reads an optional `tabmask.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TABMASK_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level, dry run
//! - [`InputConfig`] - input delimiter
//! - [`OutputConfig`] - output directory, delimiter, file suffix
//! - [`AnonymizationConfig`](crate::anonymization::AnonymizationConfig) - seed,
//!   column type overrides, pattern library, audit log
//! - [`LoggingConfig`] - rolling file logs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [output]
//! directory = "./anonymized"
//!
//! [anonymization]
//! seed = 42
//!
//! [anonymization.column_types]
//! "Customer Ref" = "categorical"
//!
//! [anonymization.audit]
//! enabled = true
//! log_path = "${TABMASK_AUDIT_DIR}/tabmask.log"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use tabmask::config::load_config;
//!
//! # fn example() {
//! match load_config("tabmask.toml") {
//!     Ok(config) => println!("Seed: {:?}", config.anonymization.seed),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, InputConfig, LoggingConfig, OutputConfig, TabmaskConfig};
