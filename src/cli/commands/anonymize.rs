//! Anonymize command implementation
//!
//! Reads a CSV file, classifies and anonymizes every column, prints the run
//! report and writes `<stem>_anonymized_<date>.csv`.

use super::{exit_code_for, load_settings, EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::adapters::csv::{destination_path, write_csv_file};
use crate::config::TabmaskConfig;
use crate::core::Pipeline;
use crate::domain::ColumnType;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Output file (defaults to `<stem>_anonymized_<date>.csv`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry run mode - print the report without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Force a column type, e.g. `--column-type zip=categorical`
    #[arg(long = "column-type", value_name = "COLUMN=TYPE")]
    pub column_types: Vec<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting anonymize command");

        let mut config = match load_settings(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        if let Err(e) = self.apply_overrides(&mut config) {
            tracing::error!(error = %e, "Invalid command line override");
            eprintln!("❌ {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let dry_run = self.dry_run || config.application.dry_run;
        if dry_run {
            tracing::info!("Dry run mode enabled - no output will be written");
            println!("🔍 DRY RUN MODE - No output will be written");
            config.anonymization.audit.enabled = false;
        }

        let pipeline = match Pipeline::from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize pipeline");
                eprintln!("❌ Failed to initialize anonymization: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let bundle = match pipeline.process_file(&self.input).await {
            Ok(bundle) => bundle,
            Err(e) => {
                tracing::error!(error = %e, "Anonymization failed");
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        print!("{}", bundle.report().format_console());

        if dry_run {
            return Ok(EXIT_SUCCESS);
        }

        let destination = self.destination(&config);
        if let Err(e) =
            write_csv_file(&destination, &bundle.anonymized, config.output.delimiter_byte()).await
        {
            tracing::error!(error = %e, path = %destination.display(), "Failed to write output");
            eprintln!("❌ Failed to write {}: {e}", destination.display());
            return Ok(EXIT_FATAL);
        }

        tracing::info!(path = %destination.display(), "Anonymized file written");
        println!("✅ Anonymized file written: {}", destination.display());
        Ok(EXIT_SUCCESS)
    }

    /// Fold `--seed` and `--column-type` into the loaded configuration
    fn apply_overrides(&self, config: &mut TabmaskConfig) -> Result<(), String> {
        if let Some(seed) = self.seed {
            tracing::info!(seed, "Overriding seed from CLI");
            config.anonymization.seed = Some(seed);
        }

        for (column, column_type) in parse_column_types(&self.column_types)? {
            tracing::info!(column = %column, column_type = %column_type, "Overriding column type from CLI");
            config.anonymization.column_types.insert(column, column_type);
        }

        Ok(())
    }

    fn destination(&self, config: &TabmaskConfig) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => destination_path(
                &self.input,
                config.output.directory.as_deref(),
                &config.output.suffix,
                chrono::Local::now().date_naive(),
            ),
        }
    }
}

/// Parse `column=type` pairs
pub fn parse_column_types(pairs: &[String]) -> Result<Vec<(String, ColumnType)>, String> {
    pairs
        .iter()
        .map(|pair| {
            let (column, column_type) = pair
                .rsplit_once('=')
                .ok_or_else(|| format!("Invalid --column-type '{pair}': expected COLUMN=TYPE"))?;
            let column = column.trim();
            if column.is_empty() {
                return Err(format!("Invalid --column-type '{pair}': column name is empty"));
            }
            Ok((column.to_string(), column_type.parse::<ColumnType>()?))
        })
        .collect()
}
