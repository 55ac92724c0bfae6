//! Tabular data model
//!
//! A [`Table`] is a fixed schema (ordered column names) plus positional rows.
//! Each cell is a [`CellValue`]: text, a number, or absent. Column and row
//! order are significant and preserved by every operation in the crate.

use super::errors::TabmaskError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value
///
/// Empty input fields are represented as [`CellValue::Absent`], never as
/// empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric value
    Number(f64),
    /// Free text
    Text(String),
    /// Missing or empty value
    Absent,
}

impl CellValue {
    /// Build a cell from a raw input field using dynamic typing
    ///
    /// Empty (or whitespace-only) fields become `Absent`, fields that parse as
    /// a finite number become `Number`, everything else is kept as `Text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabmask::domain::CellValue;
    ///
    /// assert_eq!(CellValue::from_field(""), CellValue::Absent);
    /// assert_eq!(CellValue::from_field("42"), CellValue::Number(42.0));
    /// assert_eq!(CellValue::from_field("Alice"), CellValue::Text("Alice".to_string()));
    /// assert_eq!(CellValue::from_field("+44"), CellValue::Text("+44".to_string()));
    /// ```
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }
        // an explicit sign would not survive the number round trip
        if trimmed.starts_with('+') {
            return Self::Text(field.to_string());
        }
        match parse_number(trimmed) {
            Some(n) => Self::Number(n),
            None => Self::Text(field.to_string()),
        }
    }

    /// Check whether the cell is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Canonical string form, `None` for absent cells
    ///
    /// Numbers use the shortest round-trip representation, so `30.0`
    /// becomes `"30"` and `1.5` stays `"1.5"`.
    pub fn canonical(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(format_number(*n)),
            Self::Text(s) => Some(s.clone()),
            Self::Absent => None,
        }
    }

    /// Numeric view of the cell, parsing text when needed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_number(s),
            Self::Absent => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// Parse a string as a finite real number
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Format a number the way it appears in canonical cell strings
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Normalizes -0.0
        return "0".to_string();
    }
    value.to_string()
}

/// A positional row over a table's schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    /// Create a row from its cells
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Get the cell at a column position
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in column order
    pub fn iter(&self) -> std::slice::Iter<'_, CellValue> {
        self.cells.iter()
    }

    pub(crate) fn set(&mut self, index: usize, value: CellValue) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }
}

impl FromIterator<CellValue> for Row {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered table of rows sharing one schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Create a table from column names and rows
    ///
    /// # Errors
    ///
    /// Returns a validation error if any row does not have exactly one cell
    /// per column.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns a validation error if the row width differs from the schema.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(TabmaskError::Validation(format!(
                "Row {} has {} cells but the table has {} columns",
                self.rows.len() + 1,
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name (first match)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at a row and column position
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Cell at a row position by column name
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.column_index(column)
            .and_then(|index| self.cell(row, index))
    }

    /// All cells of a column in row order
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Present (non-absent) cells of a column in row order
    pub fn present_values(&self, index: usize) -> Vec<&CellValue> {
        self.column(index).filter(|v| !v.is_absent()).collect()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
}
