//! Audit logging module
//!
//! One structured entry per anonymization run, with the source content
//! hashed and no cell values.

pub mod logger;

pub use logger::{hash_content, AuditLogger};
