//! Anonymization module for Tabmask
//!
//! This module classifies CSV columns and replaces their values with
//! non-identifying substitutes while keeping the table's shape.
//!
//! # Architecture
//!
//! The anonymization pipeline consists of:
//! - **Detection**: column-name indicators and value-shape heuristics
//! - **Anonymization**: synthetic replacement, generalization, bucketing, shuffling
//! - **Run state**: per-run caches for consistent pseudonyms and shuffles
//! - **Audit**: structured run log with hashed source content
//!
//! # Usage
//!
//! ```rust
//! use tabmask::anonymization::{AnonymizationConfig, AnonymizationEngine};
//! use tabmask::domain::Table;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let table = Table::new(vec!["email".to_string()]);
//! let types = engine.classify_table(&table);
//! let anonymized = engine.anonymize(&table, &types);
//! assert_eq!(anonymized.row_count(), 0);
//! # Ok(())
//! # }
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod report;
pub mod state;

// Re-export main types
pub use config::{AnonymizationConfig, AuditConfig};
pub use engine::{AnonymizationEngine, AnonymizationOutcome, ColumnSummary, PseudonymCounts};
pub use report::RunReport;
pub use state::RunState;
