//! Core business logic for Tabmask.
//!
//! This module orchestrates a full anonymization run.
//!
//! # Modules
//!
//! - [`pipeline`] - parse, classify, anonymize and assemble the result bundle
//!
//! # Workflow
//!
//! 1. **Parse**: read CSV text into a [`Table`](crate::domain::Table)
//! 2. **Classify**: assign one column type per header (overrides win)
//! 3. **Anonymize**: run the engine once with a fresh run state
//! 4. **Audit** (optional): append one entry to the audit log
//! 5. **Bundle**: original and anonymized tables plus per-column metadata
//!
//! # Example
//!
//! ```rust
//! use tabmask::anonymization::AnonymizationConfig;
//! use tabmask::core::Pipeline;
//!
//! # fn example() -> tabmask::domain::Result<()> {
//! let pipeline = Pipeline::new(AnonymizationConfig::default())?;
//! let bundle = pipeline.process_csv("email,age\nann@corp.example,34\n")?;
//!
//! assert_eq!(bundle.headers, vec!["email", "age"]);
//! assert_eq!(bundle.anonymized.row_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;

pub use pipeline::{Pipeline, ResultBundle, RunStats};
