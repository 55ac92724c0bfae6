//! Pattern library for column classification
//!
//! Holds the column-name indicator lists and the compiled value-shape
//! regexes used by the heuristic classifier. Indicator lists can be replaced
//! from a TOML library; value shapes are fixed.

use crate::domain::ColumnType;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// Bare international digits, parenthesized/separated NANP groupings, ten digits
const PHONE_PATTERNS: [&str; 4] = [
    r"^\+?[1-9]\d{6,14}$",
    r"^\(?\d{3}\)?[-.]?\d{3}[-.]?\d{4}$",
    r"^\d{10}$",
    r"^\d{3}[-.]\d{3}[-.]\d{4}$",
];

const DATE_PATTERNS: [&str; 2] = [
    r"^\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}$",
    r"^\d{4}[/\-]\d{1,2}[/\-]\d{1,2}$",
];

const NAME_SHAPE_PATTERNS: [&str; 3] = [
    r"^[A-Z][a-z]+ [A-Z][a-z]+$",
    r"^[A-Z][a-z]+$",
    r"^[A-Z][a-z]+, [A-Z][a-z]+$",
];

const NAME_INDICATORS: [&str; 6] = ["name", "first", "last", "fname", "lname", "fullname"];
const EMAIL_INDICATORS: [&str; 3] = ["email", "mail", "e_mail"];
const PHONE_INDICATORS: [&str; 5] = ["phone", "mobile", "tel", "telephone", "contact"];
const DATE_INDICATORS: [&str; 5] = ["date", "birth", "created", "updated", "time"];

/// Column-name indicator lists, checked in priority order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndicatorLists {
    /// Substrings marking name columns
    #[serde(default = "default_name_indicators")]
    pub name: Vec<String>,
    /// Substrings marking email columns
    #[serde(default = "default_email_indicators")]
    pub email: Vec<String>,
    /// Substrings marking phone columns
    #[serde(default = "default_phone_indicators")]
    pub phone: Vec<String>,
    /// Substrings marking date columns
    #[serde(default = "default_date_indicators")]
    pub date: Vec<String>,
}

impl Default for IndicatorLists {
    fn default() -> Self {
        Self {
            name: default_name_indicators(),
            email: default_email_indicators(),
            phone: default_phone_indicators(),
            date: default_date_indicators(),
        }
    }
}

impl IndicatorLists {
    /// Indicator lists paired with their type, in match priority
    pub fn prioritized(&self) -> [(ColumnType, &[String]); 4] {
        [
            (ColumnType::Name, self.name.as_slice()),
            (ColumnType::Email, self.email.as_slice()),
            (ColumnType::Phone, self.phone.as_slice()),
            (ColumnType::Date, self.date.as_slice()),
        ]
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_name_indicators() -> Vec<String> {
    to_owned_list(&NAME_INDICATORS)
}

fn default_email_indicators() -> Vec<String> {
    to_owned_list(&EMAIL_INDICATORS)
}

fn default_phone_indicators() -> Vec<String> {
    to_owned_list(&PHONE_INDICATORS)
}

fn default_date_indicators() -> Vec<String> {
    to_owned_list(&DATE_INDICATORS)
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    indicators: IndicatorLists,
}

/// Compiled value-shape patterns plus indicator lists
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    indicators: IndicatorLists,
    email: Regex,
    phone: Vec<Regex>,
    date: Vec<Regex>,
    name_shape: Vec<Regex>,
}

impl PatternRegistry {
    /// Create a registry with built-in indicators
    pub fn default_patterns() -> Result<Self> {
        Self::with_indicators(IndicatorLists::default())
    }

    /// Create a registry with custom indicator lists
    pub fn with_indicators(indicators: IndicatorLists) -> Result<Self> {
        let indicators = IndicatorLists {
            name: normalize(indicators.name),
            email: normalize(indicators.email),
            phone: normalize(indicators.phone),
            date: normalize(indicators.date),
        };

        Ok(Self {
            indicators,
            email: Regex::new(EMAIL_PATTERN).context("Invalid email pattern")?,
            phone: compile_all(&PHONE_PATTERNS).context("Invalid phone pattern")?,
            date: compile_all(&DATE_PATTERNS).context("Invalid date pattern")?,
            name_shape: compile_all(&NAME_SHAPE_PATTERNS).context("Invalid name pattern")?,
        })
    }

    /// Create a registry from a TOML pattern library file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a registry from TOML content
    ///
    /// ```toml
    /// [indicators]
    /// name = ["name", "surname", "nombre"]
    /// phone = ["phone", "tel", "fax"]
    /// ```
    ///
    /// Lists that are left out keep their built-in defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;
        Self::with_indicators(library.indicators)
    }

    /// Indicator lists
    pub fn indicators(&self) -> &IndicatorLists {
        &self.indicators
    }

    /// Match a column name against the indicator lists
    ///
    /// Case-insensitive substring match; the first list (in priority order)
    /// with a hit wins.
    pub fn match_column_name(&self, column_name: &str) -> Option<ColumnType> {
        let clean = column_name.trim().to_lowercase();
        self.indicators
            .prioritized()
            .into_iter()
            .find(|(_, list)| list.iter().any(|indicator| clean.contains(indicator.as_str())))
            .map(|(column_type, _)| column_type)
    }

    /// `local@domain.tld` shape
    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Phone shapes, tested against the value with whitespace removed
    pub fn is_phone(&self, value: &str) -> bool {
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        self.phone.iter().any(|re| re.is_match(&compact))
    }

    /// Slash or dash separated numeric date shapes
    pub fn is_date_shape(&self, value: &str) -> bool {
        self.date.iter().any(|re| re.is_match(value))
    }

    /// Proper-case `First Last`, `Single` or `Last, First`
    pub fn is_name_shape(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.name_shape.iter().any(|re| re.is_match(trimmed))
    }
}

fn normalize(list: Vec<String>) -> Vec<String> {
    list.into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("Invalid regex: {p}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert_eq!(registry.indicators().name.len(), 6);
    }

    #[test]
    fn test_column_name_priority() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert_eq!(registry.match_column_name("Full Name"), Some(ColumnType::Name));
        // "email_name" hits both lists; name indicators win
        assert_eq!(registry.match_column_name("email_name"), Some(ColumnType::Name));
        assert_eq!(registry.match_column_name("E_MAIL"), Some(ColumnType::Email));
        assert_eq!(registry.match_column_name("contact_no"), Some(ColumnType::Phone));
        assert_eq!(registry.match_column_name("birth_dt"), Some(ColumnType::Date));
        assert_eq!(registry.match_column_name("salary"), None);
    }

    #[test]
    fn test_email_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(registry.is_email("test@example.com"));
        assert!(!registry.is_email("not-an-email"));
        assert!(!registry.is_email("two words@example.com"));
    }

    #[test]
    fn test_phone_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(registry.is_phone("(555) 123-4567"));
        assert!(registry.is_phone("555.123.4567"));
        assert!(registry.is_phone("+44 20 7946 0958"));
        assert!(registry.is_phone("5551234567"));
        assert!(!registry.is_phone("42"));
        assert!(!registry.is_phone("12-34"));
    }

    #[test]
    fn test_date_shape_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(registry.is_date_shape("3/14/2021"));
        assert!(registry.is_date_shape("2021-03-14"));
        assert!(!registry.is_date_shape("March 14"));
    }

    #[test]
    fn test_name_shape_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(registry.is_name_shape("John Smith"));
        assert!(registry.is_name_shape("Madonna"));
        assert!(registry.is_name_shape("Smith, John"));
        assert!(!registry.is_name_shape("john smith"));
        assert!(!registry.is_name_shape("ACME Corp"));
    }

    #[test]
    fn test_custom_indicators_from_toml() {
        let registry = PatternRegistry::from_toml(
            r#"
[indicators]
name = ["Nombre"]
"#,
        )
        .unwrap();

        assert_eq!(registry.match_column_name("nombre_completo"), Some(ColumnType::Name));
        assert_eq!(registry.match_column_name("first_name"), None);
        // Omitted lists keep defaults
        assert_eq!(registry.match_column_name("email"), Some(ColumnType::Email));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(PatternRegistry::from_toml("indicators = 5").is_err());
    }
}
