//! Column semantic types

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic category inferred for a column
///
/// Exactly one type is assigned per column per run, before any transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Person names
    Name,
    /// Email addresses
    Email,
    /// Phone numbers
    Phone,
    /// Calendar dates
    Date,
    /// Numeric measurements
    Numeric,
    /// Low-cardinality labels and the generic fallback
    Categorical,
    /// Column with no present values
    Unknown,
}

impl ColumnType {
    /// All column types in display order
    pub const ALL: [ColumnType; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Date,
        Self::Numeric,
        Self::Categorical,
        Self::Unknown,
    ];

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "date" => Ok(Self::Date),
            "numeric" => Ok(Self::Numeric),
            "categorical" => Ok(Self::Categorical),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Unknown column type '{s}'. Must be one of: name, email, phone, date, numeric, categorical, unknown"
            )),
        }
    }
}

/// Transform a column actually received during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMethod {
    /// Replaced by consistent synthetic values (name, email, phone)
    Synthesize,
    /// Dates reduced to month and year
    Generalize,
    /// Numbers replaced by range buckets
    Range,
    /// Values permuted within the column
    Shuffle,
    /// Column had no present cells
    PassThrough,
}

impl TransformMethod {
    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synthesize => "synthesize",
            Self::Generalize => "generalize",
            Self::Range => "range",
            Self::Shuffle => "shuffle",
            Self::PassThrough => "pass_through",
        }
    }
}

impl fmt::Display for TransformMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name to type mapping, iterated in insertion (column) order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypeMap {
    entries: Vec<(String, ColumnType)>,
}

impl ColumnTypeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type of a column, replacing any previous entry
    pub fn insert(&mut self, column: impl Into<String>, column_type: ColumnType) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = column_type,
            None => self.entries.push((column, column_type)),
        }
    }

    /// Type of a column
    pub fn get(&self, column: &str) -> Option<ColumnType> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, t)| *t)
    }

    /// Check whether a column has a type
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Iterate over entries in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), *t))
    }

    /// Number of typed columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ColumnType)> for ColumnTypeMap {
    fn from_iter<I: IntoIterator<Item = (String, ColumnType)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (column, column_type) in iter {
            map.insert(column, column_type);
        }
        map
    }
}

impl Serialize for ColumnTypeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, column_type) in &self.entries {
            map.serialize_entry(column, column_type)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_round_trip_str() {
        for column_type in ColumnType::ALL {
            assert_eq!(column_type.as_str().parse::<ColumnType>().unwrap(), column_type);
        }
        assert_eq!("  EMAIL ".parse::<ColumnType>().unwrap(), ColumnType::Email);
        assert!("address".parse::<ColumnType>().is_err());
    }

    #[test]
    fn test_column_type_map_keeps_order() {
        let mut map = ColumnTypeMap::new();
        map.insert("z", ColumnType::Numeric);
        map.insert("a", ColumnType::Name);
        map.insert("z", ColumnType::Categorical);

        let columns: Vec<&str> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["z", "a"]);
        assert_eq!(map.get("z"), Some(ColumnType::Categorical));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_column_type_map_serializes_as_object() {
        let map: ColumnTypeMap = vec![
            ("email".to_string(), ColumnType::Email),
            ("age".to_string(), ColumnType::Numeric),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"email":"email","age":"numeric"}"#);
    }
}
