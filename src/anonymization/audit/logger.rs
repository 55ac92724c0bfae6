//! Audit logger for anonymization runs

use crate::anonymization::engine::ColumnSummary;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// One audit entry per run
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    source: &'a str,
    /// SHA-256 of the source content (never log plaintext values)
    source_hash: String,
    rows: usize,
    columns: usize,
    column_summaries: &'a [ColumnSummary],
}

/// Append-only audit log of anonymization runs
///
/// Entries record what was done to each column, never cell values.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Record one run
    pub fn log_run(
        &self,
        source: &str,
        content: &[u8],
        rows: usize,
        columns: &[ColumnSummary],
    ) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            source,
            source_hash: hash_content(content),
            rows,
            columns: columns.len(),
            column_summaries: columns,
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry<'_>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let columns = entry
                .column_summaries
                .iter()
                .map(|c| format!("{}={}/{}", c.column, c.column_type, c.method))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                file,
                "[{}] Source: {} | SHA-256: {} | Rows: {} | Columns: {}",
                entry.timestamp, entry.source, entry.source_hash, entry.rows, columns
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hex SHA-256 of arbitrary content
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
