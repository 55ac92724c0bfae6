//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tabmask using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Tabmask - CSV column classification and anonymization
#[derive(Parser, Debug)]
#[command(name = "tabmask")]
#[command(version, about, long_about = None)]
#[command(author = "Tabmask Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tabmask.toml", env = "TABMASK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TABMASK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify and anonymize every column of a CSV file
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Shuffle selected columns of a CSV file
    Shuffle(commands::shuffle::ShuffleArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Run the selected command and return the process exit code
    pub async fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Anonymize(args) => args.execute(&self.config).await,
            Commands::Shuffle(args) => args.execute(&self.config).await,
            Commands::ValidateConfig(args) => args.execute(&self.config).await,
            Commands::Init(args) => args.execute().await,
        }
    }
}
