//! Column shuffling
//!
//! Anonymization by permuting a column's own values: the value set and its
//! distribution survive, the link to the row does not.

use crate::domain::{CellValue, Table};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::collections::HashMap;

/// A column's present values and their random permutation
///
/// Lookups go through the first position of a value among the column's
/// present values, so every row holding the same original value resolves to
/// the same shuffled slot. Repeated values therefore collapse onto one
/// output value.
#[derive(Debug, Clone)]
pub struct ColumnShuffle {
    first_positions: HashMap<String, usize>,
    shuffled: Vec<CellValue>,
}

impl ColumnShuffle {
    /// Build the permutation of a column's cells (absent cells skipped)
    pub fn build<'a, I>(cells: I, rng: &mut dyn RngCore) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut first_positions = HashMap::new();
        let mut shuffled = Vec::new();

        for cell in cells {
            if let Some(key) = cell.canonical() {
                first_positions.entry(key).or_insert(shuffled.len());
                shuffled.push(cell.clone());
            }
        }

        shuffled.shuffle(rng);

        Self {
            first_positions,
            shuffled,
        }
    }

    /// Shuffled replacement for an original value (canonical string form)
    ///
    /// Returns `None` when the value is not part of the column.
    pub fn lookup(&self, original: &str) -> Option<&CellValue> {
        if self.shuffled.is_empty() {
            return None;
        }
        let position = *self.first_positions.get(original)?;
        self.shuffled.get(position % self.shuffled.len())
    }

    /// Number of present values
    pub fn len(&self) -> usize {
        self.shuffled.len()
    }

    /// Check whether the column had no present values
    pub fn is_empty(&self) -> bool {
        self.shuffled.is_empty()
    }

    /// The permuted values
    pub fn values(&self) -> &[CellValue] {
        &self.shuffled
    }
}

/// Shuffle whole columns in place across the table
///
/// Each named column is permuted independently: the k-th present cell of the
/// column receives the k-th element of the column's permutation, absent cells
/// stay absent. Unknown column names are skipped and returned.
pub fn shuffle_columns<S: AsRef<str>>(
    table: &Table,
    columns: &[S],
    rng: &mut dyn RngCore,
) -> (Table, Vec<String>) {
    let mut result = table.clone();
    let mut missing = Vec::new();

    for column in columns {
        let column = column.as_ref();
        let Some(index) = table.column_index(column) else {
            tracing::warn!(column = %column, "Column not found, skipping shuffle");
            missing.push(column.to_string());
            continue;
        };

        let mut values: Vec<CellValue> = table
            .present_values(index)
            .into_iter()
            .cloned()
            .collect();
        values.shuffle(rng);

        let mut next = values.into_iter();
        for row in result.rows_mut() {
            if row.get(index).is_some_and(|cell| !cell.is_absent()) {
                if let Some(value) = next.next() {
                    row.set(index, value);
                }
            }
        }

        tracing::debug!(column = %column, "Column shuffled");
    }

    (result, missing)
}
