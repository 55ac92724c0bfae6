//! Heuristic column classifier
//!
//! Column-name indicators first, then value-shape coverage over the
//! column's present values.

use super::{patterns::PatternRegistry, ColumnClassifier};
use crate::anonymization::anonymizer::date::parse_calendar_date;
use crate::domain::table::parse_number;
use crate::domain::{CellValue, ColumnType};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Share of values that must look like emails
pub const EMAIL_COVERAGE: f64 = 0.7;
/// Share of values that must look like phone numbers
pub const PHONE_COVERAGE: f64 = 0.7;
/// Share of values that must look like dates
pub const DATE_COVERAGE: f64 = 0.6;
/// Share of values that must be numeric
pub const NUMERIC_COVERAGE: f64 = 0.9;
/// Share of values that must look like personal names
pub const NAME_COVERAGE: f64 = 0.6;

/// Distinct-value floor below which a column is always low-cardinality
const CATEGORICAL_MIN_DISTINCT: usize = 10;
const CATEGORICAL_RATIO: f64 = 0.5;

/// Name + value-shape classifier
#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    pattern_registry: Arc<PatternRegistry>,
}

impl HeuristicClassifier {
    /// Create a classifier with the built-in pattern library
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self::with_registry(registry))
    }

    /// Create a classifier with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            pattern_registry: Arc::new(registry),
        }
    }

    fn classify_values(&self, values: &[(String, bool)]) -> ColumnType {
        let registry = &self.pattern_registry;

        if coverage(values, |v, _| registry.is_email(v)) >= EMAIL_COVERAGE {
            return ColumnType::Email;
        }

        if coverage(values, |v, _| registry.is_phone(v)) >= PHONE_COVERAGE {
            return ColumnType::Phone;
        }

        let date_like = |v: &str, _| registry.is_date_shape(v) || parse_calendar_date(v).is_some();
        if coverage(values, date_like) >= DATE_COVERAGE {
            return ColumnType::Date;
        }

        let numeric = |v: &str, is_number| is_number || parse_number(v).is_some();
        if coverage(values, numeric) >= NUMERIC_COVERAGE {
            return ColumnType::Numeric;
        }

        let distinct: HashSet<&str> = values.iter().map(|(v, _)| v.as_str()).collect();
        let limit = CATEGORICAL_MIN_DISTINCT.max((values.len() as f64 * CATEGORICAL_RATIO) as usize);
        if distinct.len() <= limit && distinct.len() > 1 {
            return ColumnType::Categorical;
        }

        if coverage(values, |v, _| registry.is_name_shape(v)) >= NAME_COVERAGE {
            return ColumnType::Name;
        }

        ColumnType::Categorical
    }
}

impl ColumnClassifier for HeuristicClassifier {
    fn classify(&self, column_name: &str, values: &[&CellValue]) -> ColumnType {
        let present: Vec<(String, bool)> = values
            .iter()
            .filter_map(|cell| {
                cell.canonical()
                    .map(|v| (v, matches!(cell, CellValue::Number(_))))
            })
            .collect();

        if present.is_empty() {
            return ColumnType::Unknown;
        }

        if let Some(column_type) = self.pattern_registry.match_column_name(column_name) {
            return column_type;
        }

        self.classify_values(&present)
    }
}

/// Fraction of values satisfying `test`
fn coverage(values: &[(String, bool)], test: impl Fn(&str, bool) -> bool) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|(v, n)| test(v, *n)).count();
    hits as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn classify(name: &str, values: &[CellValue]) -> ColumnType {
        let classifier = HeuristicClassifier::new().unwrap();
        let refs: Vec<&CellValue> = values.iter().collect();
        classifier.classify(name, &refs)
    }

    fn text(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from_field(v)).collect()
    }

    #[test_case("Full Name", ColumnType::Name)]
    #[test_case("LNAME", ColumnType::Name)]
    #[test_case("  Email  ", ColumnType::Email)]
    #[test_case("mobile_no", ColumnType::Phone)]
    #[test_case("created_at", ColumnType::Date)]
    #[test_case("Date of Birth", ColumnType::Date)]
    fn test_name_indicators(column: &str, expected: ColumnType) {
        assert_eq!(classify(column, &text(&["x", "y"])), expected);
    }

    #[test]
    fn test_name_indicator_priority() {
        // "name" beats "email"
        assert_eq!(classify("email_name", &text(&["a@b.co"])), ColumnType::Name);
        // "contact" is a phone indicator even with email values
        assert_eq!(
            classify("contact", &text(&["a@b.co", "c@d.org"])),
            ColumnType::Phone
        );
    }

    #[test]
    fn test_no_present_values_is_unknown() {
        let values = vec![CellValue::Absent, CellValue::Absent];
        assert_eq!(classify("first_name", &values), ColumnType::Unknown);
        assert_eq!(classify("x", &[]), ColumnType::Unknown);
    }

    #[test]
    fn test_email_values() {
        let values = text(&["a@b.co", "c@d.org", "e@f.net", "nope"]);
        assert_eq!(classify("col", &values), ColumnType::Email);
    }

    #[test]
    fn test_email_threshold_is_inclusive() {
        // exactly 70%
        let values = text(&[
            "a@b.co", "b@b.co", "c@b.co", "d@b.co", "e@b.co", "f@b.co", "g@b.co", "x", "y", "z",
        ]);
        assert_eq!(classify("col", &values), ColumnType::Email);
    }

    #[test]
    fn test_phone_values() {
        let values = text(&["555-123-4567", "(555) 987-6543", "+14155552671"]);
        assert_eq!(classify("col", &values), ColumnType::Phone);
    }

    #[test]
    fn test_date_values() {
        let values = text(&["2021-03-14", "03/15/2021", "April 2, 2020", "n/a"]);
        assert_eq!(classify("col", &values), ColumnType::Date);
    }

    #[test]
    fn test_numeric_values() {
        let values = text(&["23", "45", "31", "67", "45", "23"]);
        assert_eq!(classify("col", &values), ColumnType::Numeric);
    }

    #[test]
    fn test_four_digit_numbers_are_numeric_not_dates() {
        let values = text(&["1500", "1600", "1700", "1500"]);
        assert_eq!(classify("col", &values), ColumnType::Numeric);
    }

    #[test]
    fn test_categorical_values() {
        let values = text(&["red", "blue", "red", "green", "blue", "red"]);
        assert_eq!(classify("col", &values), ColumnType::Categorical);
    }

    #[test]
    fn test_name_shaped_values() {
        // more distinct values than the categorical limit
        let names: Vec<String> = (0..24)
            .map(|i| format!("Person{} Surname", char::from(b'a' + i as u8)))
            .collect();
        let values: Vec<CellValue> = names.iter().map(|n| CellValue::from(n.as_str())).collect();
        assert_eq!(classify("col", &values), ColumnType::Name);
    }

    #[test]
    fn test_single_distinct_value_defaults_to_categorical() {
        let values = text(&["same", "same", "same"]);
        assert_eq!(classify("col", &values), ColumnType::Categorical);
    }

    #[test]
    fn test_high_cardinality_free_text_defaults_to_categorical() {
        let notes: Vec<String> = (0..30).map(|i| format!("note number {i}")).collect();
        let values: Vec<CellValue> = notes.iter().map(|n| CellValue::from(n.as_str())).collect();
        assert_eq!(classify("col", &values), ColumnType::Categorical);
    }

    #[test]
    fn test_absent_cells_ignored() {
        let values = vec![
            CellValue::Absent,
            CellValue::from("a@b.co"),
            CellValue::Absent,
            CellValue::from("c@d.org"),
        ];
        assert_eq!(classify("col", &values), ColumnType::Email);
    }

    #[test]
    fn test_custom_indicators() {
        let registry = PatternRegistry::from_toml("[indicators]\nname = [\"nombre\"]\n").unwrap();
        let classifier = HeuristicClassifier::with_registry(registry);
        let values = text(&["x", "y"]);
        let refs: Vec<&CellValue> = values.iter().collect();
        assert_eq!(classifier.classify("Nombre", &refs), ColumnType::Name);
        assert_eq!(classifier.classify("name", &refs), ColumnType::Categorical);
    }
}
