//! External format integrations for Tabmask.
//!
//! - [`csv`] - delimited text input and output
//!
//! # Example
//!
//! ```rust
//! use tabmask::adapters::csv::{parse_csv, to_csv_string};
//!
//! # fn example() -> tabmask::domain::Result<()> {
//! let table = parse_csv("name,age\nAlice,34\n", b',')?;
//! assert_eq!(to_csv_string(&table, b',')?, "name,age\nAlice,34\n");
//! # Ok(())
//! # }
//! ```

pub mod csv;
