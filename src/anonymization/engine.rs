//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that classifies columns
//! and dispatches every present cell to the transform matching its column
//! type.
//!
//! # Transforms
//!
//! | Type | Transform |
//! |---|---|
//! | name, email, phone | consistent synthetic replacement |
//! | date | month-year generalization |
//! | numeric | range bucketing, shuffle for high-cardinality columns |
//! | categorical, unknown | in-column shuffle |
//!
//! # Examples
//!
//! ```
//! use tabmask::anonymization::{AnonymizationConfig, AnonymizationEngine};
//! use tabmask::domain::{CellValue, Row, Table};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AnonymizationConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let engine = AnonymizationEngine::new(config)?;
//!
//! let table = Table::from_rows(
//!     vec!["email".to_string()],
//!     vec![Row::new(vec![CellValue::from("jane@corp.example")])],
//! )?;
//! let types = engine.classify_table(&table);
//! let anonymized = engine.anonymize(&table, &types);
//! assert_ne!(anonymized.cell(0, 0), table.cell(0, 0));
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    anonymizer::{
        bucketing::bucket_value,
        date::{generalize_date, parse_calendar_date},
        shuffle,
        synthetic::{FakeGenerator, SyntheticGenerator},
    },
    config::AnonymizationConfig,
    detector::{ColumnClassifier, HeuristicClassifier, PatternRegistry},
    state::RunState,
};
use crate::domain::{CellValue, ColumnType, ColumnTypeMap, Table, TransformMethod};
use crate::log_column_classified;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::sync::Arc;

/// What happened to one column during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub column: String,
    /// Type the column was processed as
    pub column_type: ColumnType,
    /// Transform actually applied
    pub method: TransformMethod,
    /// Non-absent cells
    pub present: usize,
    /// Absent cells, passed through unchanged
    pub absent: usize,
}

/// Result of a detailed run
#[derive(Debug, Clone)]
pub struct AnonymizationOutcome {
    /// Anonymized table, same shape as the input
    pub table: Table,
    /// Per-column summary in column order
    pub columns: Vec<ColumnSummary>,
    /// Distinct names, emails and phones pseudonymized
    pub pseudonyms: PseudonymCounts,
}

/// Distinct originals replaced per pseudonymized category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PseudonymCounts {
    /// Distinct names
    pub names: usize,
    /// Distinct email addresses
    pub emails: usize,
    /// Distinct phone numbers
    pub phones: usize,
}

/// Main anonymization engine
///
/// Holds only immutable configuration; every run creates its own
/// [`RunState`], so one engine can serve concurrent runs through `Arc`.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    classifier: Arc<dyn ColumnClassifier>,
    generator: Arc<dyn SyntheticGenerator>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pattern
    /// library cannot be loaded.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let classifier: Arc<dyn ColumnClassifier> = match config.pattern_library {
            Some(ref path) => Arc::new(HeuristicClassifier::with_registry(
                PatternRegistry::from_file(path)?,
            )),
            None => Arc::new(HeuristicClassifier::new()?),
        };

        Ok(Self {
            config,
            classifier,
            generator: Arc::new(FakeGenerator::new()),
        })
    }

    /// Replace the synthetic value generator
    pub fn with_generator(mut self, generator: impl SyntheticGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Replace the column classifier
    pub fn with_classifier(mut self, classifier: impl ColumnClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Engine configuration
    pub fn config(&self) -> &AnonymizationConfig {
        &self.config
    }

    /// Random source for one run: seeded when configured, entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Type of a single column: configured override, else classification
    pub fn classify_column(&self, table: &Table, index: usize) -> ColumnType {
        let Some(name) = table.headers().get(index) else {
            return ColumnType::Unknown;
        };

        if let Some(column_type) = self.config.column_types.get(name) {
            log_column_classified!(name, column_type, "override");
            return *column_type;
        }

        let values: Vec<&CellValue> = table.column(index).collect();
        let column_type = self.classifier.classify(name, &values);
        log_column_classified!(name, column_type, "heuristic");
        column_type
    }

    /// Classify every column of a table
    ///
    /// A table without rows yields an empty map.
    pub fn classify_table(&self, table: &Table) -> ColumnTypeMap {
        if table.is_empty() {
            return ColumnTypeMap::new();
        }

        let mut types = ColumnTypeMap::new();
        for (index, name) in table.headers().iter().enumerate() {
            if !types.contains(name) {
                types.insert(name.clone(), self.classify_column(table, index));
            }
        }
        types
    }

    /// Anonymize a table using the configured random source
    pub fn anonymize(&self, table: &Table, column_types: &ColumnTypeMap) -> Table {
        let mut rng = self.rng();
        self.anonymize_with_rng(table, column_types, &mut rng)
    }

    /// Anonymize a table with an explicit random source
    pub fn anonymize_with_rng(
        &self,
        table: &Table,
        column_types: &ColumnTypeMap,
        rng: &mut dyn RngCore,
    ) -> Table {
        self.anonymize_detailed(table, column_types, rng).table
    }

    /// Anonymize a table and report what was done to each column
    ///
    /// Columns missing from `column_types` are classified first. Absent
    /// cells are copied unchanged; a cell a transform cannot handle keeps its
    /// original value. A table without rows yields no column summaries.
    pub fn anonymize_detailed(
        &self,
        table: &Table,
        column_types: &ColumnTypeMap,
        rng: &mut dyn RngCore,
    ) -> AnonymizationOutcome {
        if table.is_empty() {
            return AnonymizationOutcome {
                table: table.clone(),
                columns: Vec::new(),
                pseudonyms: PseudonymCounts::default(),
            };
        }

        let mut state = RunState::new();
        let mut output = table.clone();
        let mut columns = Vec::with_capacity(table.column_count());

        for (index, name) in table.headers().iter().enumerate() {
            let column_type = column_types
                .get(name)
                .unwrap_or_else(|| self.classify_column(table, index));

            let present = table.column(index).filter(|c| !c.is_absent()).count();
            let method = if present == 0 {
                TransformMethod::PassThrough
            } else {
                self.anonymize_column(table, &mut output, index, column_type, &mut state, rng)
            };

            tracing::debug!(
                column = %name,
                column_type = %column_type,
                method = %method,
                present,
                "Column anonymized"
            );

            columns.push(ColumnSummary {
                column: name.clone(),
                column_type,
                method,
                present,
                absent: table.row_count() - present,
            });
        }

        let mapper = state.mapper();
        AnonymizationOutcome {
            table: output,
            columns,
            pseudonyms: PseudonymCounts {
                names: mapper.name_count(),
                emails: mapper.email_count(),
                phones: mapper.phone_count(),
            },
        }
    }

    fn anonymize_column(
        &self,
        table: &Table,
        output: &mut Table,
        index: usize,
        column_type: ColumnType,
        state: &mut RunState,
        rng: &mut dyn RngCore,
    ) -> TransformMethod {
        let generator = self.generator.as_ref();
        let high_cardinality = column_type == ColumnType::Numeric
            && state.numeric_profile(index, table).is_high_cardinality();

        match column_type {
            ColumnType::Name | ColumnType::Email | ColumnType::Phone => {
                for_each_present(table, output, index, |value, _| {
                    let mapper = state.mapper_mut();
                    let pseudonym = match column_type {
                        ColumnType::Name => mapper.map_name(&value, generator, rng),
                        ColumnType::Email => mapper.map_email(&value, generator, rng),
                        _ => mapper.map_phone(&value, generator, rng),
                    };
                    CellValue::Text(pseudonym)
                });
                TransformMethod::Synthesize
            }
            ColumnType::Date => {
                for_each_present(table, output, index, |value, cell| {
                    match parse_calendar_date(&value) {
                        Some(_) => CellValue::Text(generalize_date(&value)),
                        None => cell.clone(),
                    }
                });
                TransformMethod::Generalize
            }
            ColumnType::Numeric if !high_cardinality => {
                for_each_present(table, output, index, |_, cell| match cell.as_f64() {
                    Some(n) => CellValue::Text(bucket_value(n)),
                    None => cell.clone(),
                });
                TransformMethod::Range
            }
            ColumnType::Numeric | ColumnType::Categorical | ColumnType::Unknown => {
                let shuffle = state.shuffle_for(index, table, rng);
                for_each_present(table, output, index, |value, cell| {
                    shuffle.lookup(&value).cloned().unwrap_or_else(|| cell.clone())
                });
                TransformMethod::Shuffle
            }
        }
    }

    /// Shuffle the named columns across the whole table
    ///
    /// Returns the shuffled table and the names that matched no column.
    pub fn shuffle_columns<S: AsRef<str>>(
        &self,
        table: &Table,
        columns: &[S],
    ) -> (Table, Vec<String>) {
        let mut rng = self.rng();
        shuffle::shuffle_columns(table, columns, &mut rng)
    }
}

/// Rewrite every present cell of a column
fn for_each_present(
    table: &Table,
    output: &mut Table,
    index: usize,
    mut transform: impl FnMut(String, &CellValue) -> CellValue,
) {
    for (row, out) in table.rows().iter().zip(output.rows_mut()) {
        let Some(cell) = row.get(index) else {
            continue;
        };
        if let Some(value) = cell.canonical() {
            out.set(index, transform(value, cell));
        }
    }
}
