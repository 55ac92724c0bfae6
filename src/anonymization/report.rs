//! Run reporting for anonymization
//!
//! Summarizes what a run did to each column: assigned type, applied
//! transform and cell counts, plus warnings worth a second look. Used for
//! dry-run output and the CLI summary. Reports never include cell values.

use crate::anonymization::engine::{ColumnSummary, PseudonymCounts};
use crate::domain::{ColumnType, TransformMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Rows processed
    pub total_rows: usize,

    /// Columns processed
    pub total_columns: usize,

    /// Column count per assigned type
    pub columns_by_type: BTreeMap<ColumnType, usize>,

    /// Per-column details in column order
    pub columns: Vec<ColumnReport>,

    /// Distinct values pseudonymized per category
    pub pseudonyms: PseudonymStats,

    /// Columns that may need a manual type override
    pub warnings: Vec<String>,

    /// Wall-clock time of the run (ms)
    pub processing_time_ms: u64,
}

/// Per-column line of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Column name
    pub column: String,
    /// Assigned type
    pub column_type: ColumnType,
    /// Applied transform
    pub method: TransformMethod,
    /// Non-absent cells
    pub present: usize,
    /// Absent cells
    pub absent: usize,
}

/// Distinct pseudonymized values
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PseudonymStats {
    /// Distinct names
    pub names: usize,
    /// Distinct emails
    pub emails: usize,
    /// Distinct phones
    pub phones: usize,
}

impl RunReport {
    /// Build a report from a run's column summaries
    pub fn new(
        total_rows: usize,
        columns: &[ColumnSummary],
        pseudonyms: PseudonymCounts,
        processing_time_ms: u64,
    ) -> Self {
        let mut columns_by_type = BTreeMap::new();
        for summary in columns {
            *columns_by_type.entry(summary.column_type).or_insert(0) += 1;
        }

        let mut report = Self {
            total_rows,
            total_columns: columns.len(),
            columns_by_type,
            columns: columns
                .iter()
                .map(|c| ColumnReport {
                    column: c.column.clone(),
                    column_type: c.column_type,
                    method: c.method,
                    present: c.present,
                    absent: c.absent,
                })
                .collect(),
            pseudonyms: PseudonymStats {
                names: pseudonyms.names,
                emails: pseudonyms.emails,
                phones: pseudonyms.phones,
            },
            warnings: Vec::new(),
            processing_time_ms,
        };

        for summary in columns {
            if let Some(warning) = column_warning(summary) {
                report.add_warning(warning);
            }
        }

        report
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                     ANONYMIZATION REPORT                      \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Rows Processed:        {}\n", self.total_rows));
        output.push_str(&format!("  Columns Processed:     {}\n", self.total_columns));
        output.push_str(&format!(
            "  Pseudonyms Generated:  {} names, {} emails, {} phones\n",
            self.pseudonyms.names, self.pseudonyms.emails, self.pseudonyms.phones
        ));
        output.push_str(&format!(
            "  Processing Time:       {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        if !self.columns_by_type.is_empty() {
            output.push_str("🔍 COLUMNS BY TYPE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (column_type, count) in &self.columns_by_type {
                output.push_str(&format!("  {:30} {:>5}\n", column_type.as_str(), count));
            }
            output.push('\n');
        }

        if !self.columns.is_empty() {
            output.push_str("📝 COLUMNS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            output.push_str(&format!(
                "  {:24} {:12} {:13} {:>7} {:>7}\n",
                "Column", "Type", "Method", "Present", "Absent"
            ));
            for column in &self.columns {
                output.push_str(&format!(
                    "  {:24} {:12} {:13} {:>7} {:>7}\n",
                    truncate(&column.column, 24),
                    column.column_type.as_str(),
                    column.method.as_str(),
                    column.present,
                    column.absent
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

fn column_warning(summary: &ColumnSummary) -> Option<String> {
    match (summary.column_type, summary.method) {
        (_, TransformMethod::PassThrough) => Some(format!(
            "Column '{}' has no values and was left unchanged",
            summary.column
        )),
        (ColumnType::Numeric, TransformMethod::Shuffle) => Some(format!(
            "Numeric column '{}' is high-cardinality and was shuffled instead of bucketed",
            summary.column
        )),
        (ColumnType::Unknown, _) => Some(format!(
            "Column '{}' could not be classified and was shuffled",
            summary.column
        )),
        _ => None,
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}
