//! Column classification module
//!
//! Provides the trait-based classification interface and the heuristic
//! implementation assigning one [`ColumnType`] per column.

pub mod heuristic;
pub mod patterns;

use crate::domain::{CellValue, ColumnType};

pub use heuristic::HeuristicClassifier;
pub use patterns::{IndicatorLists, PatternRegistry};

/// Trait for column classifiers
pub trait ColumnClassifier: Send + Sync {
    /// Classify a column from its name and every value in it
    ///
    /// Absent cells may be included; implementations ignore them.
    fn classify(&self, column_name: &str, values: &[&CellValue]) -> ColumnType;
}
