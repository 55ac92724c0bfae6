//! Logging and observability
//!
//! Structured logging with a console layer and an optional JSON rolling
//! file layer. Cell values are never logged; events carry column names,
//! types, methods and counts only.
//!
//! # Example
//!
//! ```no_run
//! use tabmask::logging::init_logging;
//! use tabmask::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an anonymization run
///
/// # Example
///
/// ```no_run
/// use tabmask::log_run_start;
///
/// log_run_start!("customers.csv", 120);
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($source:expr, $rows:expr) => {
        tracing::info!(
            source = %$source,
            rows = $rows,
            "Starting anonymization run"
        );
    };
}

/// Log the completion of an anonymization run
///
/// # Example
///
/// ```no_run
/// use tabmask::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(120, 6, Duration::from_millis(15));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($rows:expr, $columns:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            columns = $columns,
            duration_ms = $duration.as_millis() as u64,
            "Anonymization run completed"
        );
    };
}

/// Log the type assigned to a column
///
/// # Example
///
/// ```no_run
/// use tabmask::log_column_classified;
/// use tabmask::domain::ColumnType;
///
/// log_column_classified!("email", ColumnType::Email, "heuristic");
/// ```
#[macro_export]
macro_rules! log_column_classified {
    ($column:expr, $column_type:expr, $source:expr) => {
        tracing::debug!(
            column = %$column,
            column_type = %$column_type,
            source = $source,
            "Column classified"
        );
    };
}
