//! Value transforms
//!
//! One module per transform family: synthetic replacement with consistent
//! mapping, date generalization, numeric bucketing and column shuffling.

pub mod bucketing;
pub mod date;
pub mod mapping;
pub mod shuffle;
pub mod synthetic;

pub use bucketing::{bucket_value, NumericProfile};
pub use date::{generalize_date, parse_calendar_date};
pub use mapping::ConsistentMapper;
pub use shuffle::{shuffle_columns, ColumnShuffle};
pub use synthetic::{FakeGenerator, SyntheticGenerator};
