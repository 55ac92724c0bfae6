//! Integration tests for logging functionality
//!
//! A global subscriber can be installed once per process, so only one test
//! here initializes logging successfully.

use tabmask::anonymization::AnonymizationConfig;
use tabmask::config::LoggingConfig;
use tabmask::core::Pipeline;
use tabmask::domain::TabmaskError;
use tabmask::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_level_rejected_before_install() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(matches!(result, Err(TabmaskError::Configuration(_))));
}

#[test]
fn test_file_logging_never_contains_cell_values() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "daily".to_string(),
    };

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.is_dir());

    let pipeline = Pipeline::new(AnonymizationConfig {
        seed: Some(1),
        ..Default::default()
    })
    .unwrap();
    pipeline
        .process_csv("email,dept\nsecret.person@corp.example,sales\nother@corp.example,ops\n")
        .unwrap();

    // flushes the non-blocking writer
    drop(guard);

    let mut contents = String::new();
    for entry in std::fs::read_dir(&log_path).unwrap() {
        contents.push_str(&std::fs::read_to_string(entry.unwrap().path()).unwrap());
    }

    assert!(contents.contains("Starting anonymization run"));
    assert!(!contents.contains("secret.person@corp.example"));
    assert!(!contents.contains("sales"));
}
