//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "tabmask.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tabmask configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: tabmask validate-config");
                println!("  3. Preview a run: tabmask anonymize data.csv --dry-run");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Tabmask Configuration File
# CSV column classification and anonymization

[application]
log_level = "info"
dry_run = false

[input]
delimiter = ","

[output]
delimiter = ","
suffix = "_anonymized"

[anonymization]
# seed = 42

[anonymization.column_types]

[anonymization.audit]
enabled = false

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and documentation
    fn generate_config_with_examples() -> String {
        r#"# Tabmask Configuration File
# CSV column classification and anonymization
#
# Environment variables can be referenced as ${VAR_NAME}; any setting can be
# overridden with TABMASK_<SECTION>_<KEY>, e.g. TABMASK_ANONYMIZATION_SEED=7.

[application]
# Log level: trace | debug | info | warn | error
log_level = "info"

# Print the run report without writing output
dry_run = false

[input]
# Single ASCII character, or "\t" for tab-separated input
delimiter = ","

[output]
# Where anonymized files go; next to the input when omitted
# directory = "./anonymized"

delimiter = ","

# Output is named <stem><suffix>_<YYYY-MM-DD>.csv
suffix = "_anonymized"

[anonymization]
# Fixed seed for reproducible output; random when omitted
# seed = 42

# Column-name indicator lists: a TOML file with an [indicators] table
# holding name, email, phone and date arrays
# pattern_library = "./patterns.toml"

# Force the type of specific columns, skipping detection
# Types: name | email | phone | date | numeric | categorical | unknown
[anonymization.column_types]
# "Customer Ref" = "categorical"
# "Contact" = "name"

[anonymization.audit]
# One entry per run: source hash, row counts, per-column type and method.
# Cell values are never written.
enabled = false
log_path = "./audit/tabmask.log"
json_format = true

[logging]
# JSON rolling log files
local_enabled = false
local_path = "./logs"
# daily | hourly
local_rotation = "daily"
"#
        .to_string()
    }
}
