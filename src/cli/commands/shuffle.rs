//! Shuffle command implementation
//!
//! Permutes the values of selected columns independently, leaving every
//! other column untouched.

use super::{exit_code_for, load_settings, EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::adapters::csv::{destination_path, read_csv_file, write_csv_file};
use crate::anonymization::AnonymizationEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the shuffle command
#[derive(Args, Debug)]
pub struct ShuffleArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Columns to shuffle (comma-separated)
    #[arg(long, required = true)]
    pub columns: String,

    /// Output file (defaults to `<stem>_shuffled_<date>.csv`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ShuffleArgs {
    /// Column names from `--columns`
    pub fn column_list(&self) -> Vec<String> {
        self.columns
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Execute the shuffle command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let columns = self.column_list();
        tracing::info!(input = %self.input.display(), columns = ?columns, "Starting shuffle command");

        if columns.is_empty() {
            eprintln!("❌ --columns must name at least one column");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let mut config = match load_settings(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };
        if let Some(seed) = self.seed {
            config.anonymization.seed = Some(seed);
        }

        let engine = match AnonymizationEngine::new(config.anonymization.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize engine");
                eprintln!("❌ Failed to initialize anonymization: {e:#}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let table = match read_csv_file(&self.input, config.input.delimiter_byte()).await {
            Ok((_, table)) => table,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let (shuffled, missing) = engine.shuffle_columns(&table, &columns);
        for column in &missing {
            println!("⚠️  Column not found, skipped: {column}");
        }
        if missing.len() == columns.len() {
            eprintln!("❌ None of the requested columns exist in {}", self.input.display());
            return Ok(EXIT_CONFIG_ERROR);
        }

        let destination = self.output.clone().unwrap_or_else(|| {
            destination_path(
                &self.input,
                config.output.directory.as_deref(),
                "_shuffled",
                chrono::Local::now().date_naive(),
            )
        });

        if let Err(e) =
            write_csv_file(&destination, &shuffled, config.output.delimiter_byte()).await
        {
            tracing::error!(error = %e, path = %destination.display(), "Failed to write output");
            eprintln!("❌ Failed to write {}: {e}", destination.display());
            return Ok(EXIT_FATAL);
        }

        println!(
            "✅ Shuffled {} column(s) across {} rows: {}",
            columns.len() - missing.len(),
            shuffled.row_count(),
            destination.display()
        );
        Ok(EXIT_SUCCESS)
    }
}
