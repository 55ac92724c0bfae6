//! Numeric generalization into range buckets

use crate::domain::table::format_number;
use crate::domain::CellValue;
use std::collections::HashSet;

/// Columns whose distinct/total ratio exceeds this are shuffled instead
pub const HIGH_CARDINALITY_RATIO: f64 = 0.5;

/// Age-like bands as (inclusive upper bound, label)
const AGE_BANDS: [(f64, &str); 9] = [
    (5.0, "0-5"),
    (12.0, "6-12"),
    (18.0, "13-18"),
    (25.0, "19-25"),
    (35.0, "26-35"),
    (45.0, "36-45"),
    (55.0, "46-55"),
    (65.0, "56-65"),
    (75.0, "66-75"),
];

/// Numeric statistics of one column, computed once per run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericProfile {
    /// Non-absent cells that parse as numbers
    pub total: usize,
    /// Distinct numeric values among them
    pub distinct: usize,
}

impl NumericProfile {
    /// Profile a column from its cells
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut seen = HashSet::new();
        let mut total = 0;
        for n in values.into_iter().filter_map(CellValue::as_f64) {
            total += 1;
            // -0.0 and 0.0 count as the same value
            seen.insert((n + 0.0).to_bits());
        }
        Self {
            total,
            distinct: seen.len(),
        }
    }

    /// distinct / total, 0 for an empty profile
    pub fn unique_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.distinct as f64 / self.total as f64
    }

    /// Whether the column should be shuffled rather than bucketed
    pub fn is_high_cardinality(&self) -> bool {
        self.unique_ratio() > HIGH_CARDINALITY_RATIO
    }
}

/// Bucket a numeric value
///
/// Values in `[0, 120]` fall into fixed age-like bands, values `>= 1000` into
/// magnitude-scaled ranges, everything else into a +/-10% window.
///
/// # Examples
///
/// ```
/// use tabmask::anonymization::anonymizer::bucketing::bucket_value;
///
/// assert_eq!(bucket_value(5.0), "0-5");
/// assert_eq!(bucket_value(76.0), "76+");
/// assert_eq!(bucket_value(1500.0), "1500-1599");
/// assert_eq!(bucket_value(500.0), "450-550");
/// ```
pub fn bucket_value(value: f64) -> String {
    if (0.0..=120.0).contains(&value) {
        return age_band(value).to_string();
    }

    if value >= 1000.0 {
        let width = 10f64.powi(value.log10().floor() as i32 - 1);
        let lower = (value / width).floor() * width;
        let upper = lower + width - 1.0;
        return format!("{}-{}", format_number(lower), format_number(upper));
    }

    let width = (value * 0.1).floor().max(1.0);
    format!(
        "{}-{}",
        format_number(value - width),
        format_number(value + width)
    )
}

fn age_band(value: f64) -> &'static str {
    AGE_BANDS
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|(_, label)| *label)
        .unwrap_or("76+")
}
