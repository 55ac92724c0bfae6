//! CLI command implementations
//!
//! Commands return the process exit code: 0 success, 2 configuration or
//! usage error, 3 input error, 5 fatal error.

pub mod anonymize;
pub mod init;
pub mod shuffle;
pub mod validate;

use crate::config::{load_config_or_default, TabmaskConfig};
use crate::domain::TabmaskError;

/// Success exit code
pub const EXIT_SUCCESS: i32 = 0;
/// Configuration or usage error exit code
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Unreadable or malformed input exit code
pub const EXIT_INPUT_ERROR: i32 = 3;
/// Fatal error exit code
pub const EXIT_FATAL: i32 = 5;

/// Load the configuration, reporting failures on stderr
fn load_settings(config_path: &str) -> Result<TabmaskConfig, i32> {
    load_config_or_default(config_path).map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        eprintln!("❌ {e}");
        EXIT_CONFIG_ERROR
    })
}

/// Exit code for a failed run
fn exit_code_for(error: &TabmaskError) -> i32 {
    match error {
        TabmaskError::Parse(_) | TabmaskError::Io(_) => EXIT_INPUT_ERROR,
        TabmaskError::Configuration(_) | TabmaskError::Validation(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_FATAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&TabmaskError::Parse("bad".into())), 3);
        assert_eq!(exit_code_for(&TabmaskError::Io("missing".into())), 3);
        assert_eq!(exit_code_for(&TabmaskError::Configuration("x".into())), 2);
        assert_eq!(exit_code_for(&TabmaskError::Export("disk".into())), 5);
    }
}
