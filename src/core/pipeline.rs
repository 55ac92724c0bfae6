//! Anonymization pipeline
//!
//! Receives a parsed table (or CSV text, or a CSV file), classifies every
//! column, runs the engine once and assembles a [`ResultBundle`].

use crate::adapters::csv::{parse_csv, read_csv_file, to_csv_string};
use crate::anonymization::{
    audit::AuditLogger, AnonymizationConfig, AnonymizationEngine, ColumnSummary, PseudonymCounts,
    RunReport,
};
use crate::config::TabmaskConfig;
use crate::domain::{ColumnTypeMap, Result, TabmaskError, Table, TransformMethod};
use crate::{log_run_complete, log_run_start};
use rand::RngCore;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct ResultBundle {
    /// The input table
    pub original: Table,
    /// Same shape, column order and row order as `original`
    pub anonymized: Table,
    /// Column names; empty when the input has no rows
    pub headers: Vec<String>,
    /// Type assigned to each column
    pub column_types: ColumnTypeMap,
    /// Per-column transform and cell counts, in column order
    pub columns: Vec<ColumnSummary>,
    /// Run statistics
    pub stats: RunStats,
}

/// Run statistics
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunStats {
    /// Rows processed
    pub rows: usize,
    /// Columns processed
    pub columns: usize,
    /// Distinct values pseudonymized
    pub pseudonyms: PseudonymCounts,
    /// Wall-clock time (ms)
    pub duration_ms: u64,
}

impl ResultBundle {
    /// Transform applied to a column
    pub fn method_of(&self, column: &str) -> Option<TransformMethod> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.method)
    }

    /// Report summarizing the run
    pub fn report(&self) -> RunReport {
        RunReport::new(
            self.stats.rows,
            &self.columns,
            self.stats.pseudonyms,
            self.stats.duration_ms,
        )
    }
}

/// Anonymization pipeline
///
/// Cheap to clone; clones share the engine.
#[derive(Clone)]
pub struct Pipeline {
    engine: Arc<AnonymizationEngine>,
    audit_logger: Option<Arc<AuditLogger>>,
    delimiter: u8,
}

impl Pipeline {
    /// Create a pipeline from anonymization settings, comma-delimited input
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the engine or audit log cannot be
    /// set up.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        let audit_logger = if config.audit.enabled {
            let logger = AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)
                .map_err(|e| TabmaskError::Configuration(format!("{e:#}")))?;
            Some(Arc::new(logger))
        } else {
            None
        };

        let engine = AnonymizationEngine::new(config)
            .map_err(|e| TabmaskError::Configuration(format!("{e:#}")))?;

        Ok(Self {
            engine: Arc::new(engine),
            audit_logger,
            delimiter: b',',
        })
    }

    /// Create a pipeline from the full application configuration
    pub fn from_config(config: &TabmaskConfig) -> Result<Self> {
        let pipeline = Self::new(config.anonymization.clone())?;
        Ok(pipeline.with_delimiter(config.input.delimiter_byte()))
    }

    /// Wrap an existing engine, without audit logging
    pub fn with_engine(engine: AnonymizationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            audit_logger: None,
            delimiter: b',',
        }
    }

    /// Set the input delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The engine used for each run
    pub fn engine(&self) -> &AnonymizationEngine {
        &self.engine
    }

    /// Run over an already parsed table
    pub fn process(&self, table: Table) -> Result<ResultBundle> {
        let mut rng = self.engine.rng();
        self.process_with_rng(table, &mut rng)
    }

    /// Run over an already parsed table with an explicit random source
    pub fn process_with_rng(&self, table: Table, rng: &mut dyn RngCore) -> Result<ResultBundle> {
        let content = match self.audit_logger {
            Some(_) => to_csv_string(&table, self.delimiter)?,
            None => String::new(),
        };
        self.run(table, "<table>", content.as_bytes(), rng)
    }

    /// Parse CSV text and run over it
    ///
    /// # Errors
    ///
    /// A parse failure is reported as one [`TabmaskError::Parse`]; no
    /// partial result is produced.
    pub fn process_csv(&self, content: &str) -> Result<ResultBundle> {
        let table = parse_csv(content, self.delimiter)?;
        let mut rng = self.engine.rng();
        self.run(table, "<text>", content.as_bytes(), &mut rng)
    }

    /// Read a CSV file and run over it
    pub async fn process_file(&self, path: impl AsRef<Path>) -> Result<ResultBundle> {
        let path = path.as_ref();
        let (content, table) = read_csv_file(path, self.delimiter).await?;
        let mut rng = self.engine.rng();
        let source = path.display().to_string();
        self.run(table, &source, content.as_bytes(), &mut rng)
    }

    fn run(
        &self,
        table: Table,
        source: &str,
        content: &[u8],
        rng: &mut dyn RngCore,
    ) -> Result<ResultBundle> {
        let start = Instant::now();
        log_run_start!(source, table.row_count());

        let headers = if table.is_empty() {
            Vec::new()
        } else {
            table.headers().to_vec()
        };

        let column_types = self.engine.classify_table(&table);
        let outcome = self.engine.anonymize_detailed(&table, &column_types, rng);

        if let Some(ref logger) = self.audit_logger {
            logger
                .log_run(source, content, table.row_count(), &outcome.columns)
                .map_err(|e| TabmaskError::Anonymization(format!("Audit log failed: {e:#}")))?;
        }

        let duration = start.elapsed();
        log_run_complete!(table.row_count(), outcome.columns.len(), duration);

        let stats = RunStats {
            rows: table.row_count(),
            columns: outcome.columns.len(),
            pseudonyms: outcome.pseudonyms,
            duration_ms: duration.as_millis() as u64,
        };

        Ok(ResultBundle {
            original: table,
            anonymized: outcome.table,
            headers,
            column_types,
            columns: outcome.columns,
            stats,
        })
    }
}
