// Tabmask - Column-aware anonymization for CSV datasets
// Copyright (c) 2025 Tabmask Contributors
// Licensed under the MIT License

//! # Tabmask - CSV column classification and anonymization
//!
//! Tabmask reads a CSV table, decides per column what kind of data it holds
//! (names, emails, phones, dates, numbers, categories) and replaces every
//! column with an anonymized counterpart of the same shape.
//!
//! ## Overview
//!
//! - **Classifying** columns from their header text and value shapes
//! - **Pseudonymizing** names, emails and phones consistently within a run
//! - **Generalizing** dates to month and year
//! - **Bucketing** numbers into age bands or magnitude ranges
//! - **Shuffling** categorical columns within themselves
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The pipeline producing a result bundle per run
//! - [`anonymization`] - Classifier, engine, transforms, audit log, report
//! - [`adapters`] - CSV reading and writing
//! - [`domain`] - Table model, column types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabmask::anonymization::AnonymizationConfig;
//! use tabmask::core::Pipeline;
//!
//! # fn main() -> tabmask::domain::Result<()> {
//! let pipeline = Pipeline::new(AnonymizationConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! })?;
//!
//! let bundle = pipeline.process_csv("name,email\nAda Lovelace,ada@example.com\n")?;
//! for (column, column_type) in bundle.column_types.iter() {
//!     println!("{column}: {column_type}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Module boundaries return [`domain::TabmaskError`]. A table that cannot be
//! parsed fails the whole run; a cell that cannot be transformed keeps its
//! original value.

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
