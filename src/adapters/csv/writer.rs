//! CSV output

use crate::domain::{CellValue, Result, TabmaskError, Table};
use crate::domain::table::format_number;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a table as CSV: header row first, then rows in order
///
/// Absent cells are written as empty fields.
pub fn write_csv<W: Write>(writer: W, table: &Table, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    let export_err = |e: csv::Error| TabmaskError::Export(e.to_string());

    writer.write_record(table.headers()).map_err(export_err)?;

    for row in table.rows() {
        let record: Vec<String> = row.iter().map(field_text).collect();
        writer.write_record(&record).map_err(export_err)?;
    }

    writer
        .flush()
        .map_err(|e| TabmaskError::Export(e.to_string()))?;
    Ok(())
}

/// Render a table as CSV text
pub fn to_csv_string(table: &Table, delimiter: u8) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, table, delimiter)?;
    String::from_utf8(buffer).map_err(|e| TabmaskError::Export(e.to_string()))
}

/// Write a table to a CSV file, creating parent directories
pub async fn write_csv_file(path: &Path, table: &Table, delimiter: u8) -> Result<()> {
    let content = to_csv_string(table, delimiter)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                TabmaskError::Export(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| TabmaskError::Export(format!("Failed to write {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), rows = table.row_count(), "CSV written");
    Ok(())
}

/// Destination for an anonymized copy of `input`
///
/// `<stem><suffix>_<YYYY-MM-DD>.csv`, placed in `output_dir` when given,
/// next to the input otherwise.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use std::path::{Path, PathBuf};
/// use tabmask::adapters::csv::destination_path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(
///     destination_path(Path::new("data/people.csv"), None, "_anonymized", date),
///     PathBuf::from("data/people_anonymized_2024-05-01.csv")
/// );
/// ```
pub fn destination_path(
    input: &Path,
    output_dir: Option<&Path>,
    suffix: &str,
    date: NaiveDate,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = format!("{stem}{suffix}_{}.csv", date.format("%Y-%m-%d"));

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn field_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(s) => s.clone(),
        CellValue::Absent => String::new(),
    }
}
