//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Tabmask configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::anonymization::AnonymizationEngine;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        // Pattern library is only read when the engine is built
        if let Err(e) = AnonymizationEngine::new(config.anonymization.clone()) {
            println!("❌ Anonymization settings are invalid");
            println!("   Error: {e:#}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Input Delimiter: {:?}", config.input.delimiter);
        println!(
            "  Output Directory: {}",
            config
                .output
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "next to input".to_string())
        );
        println!("  Output Suffix: {}", config.output.suffix);
        println!(
            "  Seed: {}",
            config
                .anonymization
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string())
        );

        let mut overrides: Vec<_> = config.anonymization.column_types.iter().collect();
        overrides.sort();
        for (column, column_type) in overrides {
            println!("  Column Override: {column} = {column_type}");
        }

        if let Some(ref library) = config.anonymization.pattern_library {
            println!("  Pattern Library: {}", library.display());
        }
        println!(
            "  Audit Log: {}",
            if config.anonymization.audit.enabled {
                config.anonymization.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(EXIT_SUCCESS)
    }
}
