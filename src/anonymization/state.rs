//! Per-run anonymization state

use crate::anonymization::anonymizer::{
    bucketing::NumericProfile, mapping::ConsistentMapper, shuffle::ColumnShuffle,
};
use crate::domain::Table;
use rand::RngCore;
use std::collections::HashMap;

/// Caches scoped to a single anonymization run
///
/// Created fresh at the start of each run and dropped at its end, so nothing
/// leaks between runs or threads.
#[derive(Debug, Default)]
pub struct RunState {
    mapper: ConsistentMapper,
    shuffles: HashMap<usize, ColumnShuffle>,
    numeric_profiles: HashMap<usize, NumericProfile>,
}

impl RunState {
    /// Create empty run state
    pub fn new() -> Self {
        Self::default()
    }

    /// The run's pseudonym mapper
    pub fn mapper(&self) -> &ConsistentMapper {
        &self.mapper
    }

    /// Mutable access to the run's pseudonym mapper
    pub fn mapper_mut(&mut self) -> &mut ConsistentMapper {
        &mut self.mapper
    }

    /// Shuffle of a column, built on first use
    pub fn shuffle_for(
        &mut self,
        column: usize,
        table: &Table,
        rng: &mut dyn RngCore,
    ) -> &ColumnShuffle {
        self.shuffles
            .entry(column)
            .or_insert_with(|| ColumnShuffle::build(table.column(column), rng))
    }

    /// Numeric profile of a column, computed on first use
    pub fn numeric_profile(&mut self, column: usize, table: &Table) -> NumericProfile {
        *self
            .numeric_profiles
            .entry(column)
            .or_insert_with(|| NumericProfile::from_values(table.column(column)))
    }

    /// Number of columns shuffled so far
    pub fn shuffled_columns(&self) -> usize {
        self.shuffles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, Row};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> Table {
        Table::from_rows(
            vec!["dept".to_string(), "salary".to_string()],
            vec![
                Row::new(vec!["a".into(), CellValue::Number(1500.0)]),
                Row::new(vec!["b".into(), CellValue::Number(1500.0)]),
                Row::new(vec!["c".into(), CellValue::Absent]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shuffle_built_once_per_column() {
        let table = table();
        let mut state = RunState::new();
        let mut rng = StdRng::seed_from_u64(3);

        let first: Vec<CellValue> = state.shuffle_for(0, &table, &mut rng).values().to_vec();
        let second: Vec<CellValue> = state.shuffle_for(0, &table, &mut rng).values().to_vec();

        assert_eq!(first, second);
        assert_eq!(state.shuffled_columns(), 1);
    }

    #[test]
    fn test_numeric_profile_cached() {
        let table = table();
        let mut state = RunState::new();

        let profile = state.numeric_profile(1, &table);
        assert_eq!(profile.total, 2);
        assert_eq!(profile.distinct, 1);
        assert_eq!(state.numeric_profile(1, &table), profile);
    }

    #[test]
    fn test_fresh_state_is_empty() {
        let state = RunState::new();
        assert_eq!(state.mapper().name_count(), 0);
        assert_eq!(state.shuffled_columns(), 0);
    }
}
