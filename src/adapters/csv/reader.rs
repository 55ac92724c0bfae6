//! CSV input

use crate::domain::{CellValue, Result, Row, TabmaskError, Table};
use std::path::Path;

/// Parse CSV text with a header row into a table
///
/// Empty fields become absent cells and numeric fields become numbers.
/// Empty lines are skipped, while a line of bare delimiters is a row of
/// absent cells. Short rows are padded with absent cells; a row with more
/// fields than the header is an error.
///
/// # Errors
///
/// Returns [`TabmaskError::Parse`] for malformed input.
///
/// # Examples
///
/// ```
/// use tabmask::adapters::csv::parse_csv;
/// use tabmask::domain::CellValue;
///
/// let table = parse_csv("name,age\nAlice,34\nBob,\n", b',').unwrap();
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.get(0, "age"), Some(&CellValue::Number(34.0)));
/// assert_eq!(table.get(1, "age"), Some(&CellValue::Absent));
/// ```
pub fn parse_csv(content: &str, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();
    let mut table = Table::new(headers);

    for (index, result) in reader.records().enumerate() {
        let record = result?;

        if record.len() > width {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            return Err(TabmaskError::Parse(format!(
                "line {line}: found {} fields, header has {width}",
                record.len()
            )));
        }

        let mut cells: Vec<CellValue> = record.iter().map(CellValue::from_field).collect();
        cells.resize(width, CellValue::Absent);
        table.push_row(Row::new(cells))?;
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "CSV parsed"
    );

    Ok(table)
}

/// Read and parse a CSV file
///
/// The read is the only suspension point.
pub async fn read_csv_file(path: &Path, delimiter: u8) -> Result<(String, Table)> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TabmaskError::Io(format!("Failed to read {}: {e}", path.display())))?;
    let table = parse_csv(&content, delimiter)?;
    Ok((content, table))
}
