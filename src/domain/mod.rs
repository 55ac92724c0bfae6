//! Domain models and types for Tabmask.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Tabular model** ([`Table`], [`Row`], [`CellValue`])
//! - **Column semantics** ([`ColumnType`], [`ColumnTypeMap`], [`TransformMethod`])
//! - **Error types** ([`TabmaskError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use tabmask::domain::{CellValue, Row, Table};
//!
//! # fn example() -> tabmask::domain::Result<()> {
//! let table = Table::from_rows(
//!     vec!["name".to_string(), "age".to_string()],
//!     vec![Row::new(vec![CellValue::from("Alice"), CellValue::Number(34.0)])],
//! )?;
//! assert_eq!(table.column_count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod column_type;
pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use column_type::{ColumnType, ColumnTypeMap, TransformMethod};
pub use errors::TabmaskError;
pub use result::Result;
pub use table::{CellValue, Row, Table};
