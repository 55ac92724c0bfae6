//! Integration tests for dry-run mode
//!
//! Dry runs classify and anonymize as usual and print the report, but never
//! write an output file or an audit entry.

use std::path::Path;
use tabmask::cli::commands::anonymize::AnonymizeArgs;
use tabmask::cli::commands::{EXIT_INPUT_ERROR, EXIT_SUCCESS};

const INPUT: &str = "full_name,email,age\nAda Lovelace,ada@example.com,34\nAlan Turing,alan@example.net,34\n";

fn setup(config: &str) -> (tempfile::TempDir, std::path::PathBuf, String) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("people.csv");
    std::fs::write(&input, INPUT).unwrap();
    let config_path = dir.path().join("tabmask.toml");
    std::fs::write(&config_path, config).unwrap();
    let config_path = config_path.to_string_lossy().into_owned();
    (dir, input, config_path)
}

fn csv_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".csv"))
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_dry_run_flag_writes_nothing() {
    let (dir, input, config_path) = setup("");

    let args = AnonymizeArgs {
        input,
        output: None,
        seed: Some(1),
        dry_run: true,
        column_types: Vec::new(),
    };
    assert_eq!(args.execute(&config_path).await.unwrap(), EXIT_SUCCESS);
    assert_eq!(csv_files(dir.path()), vec!["people.csv"]);
}

#[tokio::test]
async fn test_dry_run_from_config_writes_nothing() {
    let (dir, input, config_path) = setup("[application]\ndry_run = true\n");

    let args = AnonymizeArgs {
        input,
        output: Some(dir.path().join("explicit.csv")),
        seed: None,
        dry_run: false,
        column_types: Vec::new(),
    };
    assert_eq!(args.execute(&config_path).await.unwrap(), EXIT_SUCCESS);
    assert!(!dir.path().join("explicit.csv").exists());
}

#[tokio::test]
async fn test_without_dry_run_writes_dated_output() {
    let (dir, input, config_path) = setup("[output]\nsuffix = \"_masked\"\n");

    let args = AnonymizeArgs {
        input,
        output: None,
        seed: Some(2),
        dry_run: false,
        column_types: Vec::new(),
    };
    assert_eq!(args.execute(&config_path).await.unwrap(), EXIT_SUCCESS);

    let files = csv_files(dir.path());
    assert_eq!(files.len(), 2);
    let written = files
        .iter()
        .find(|name| name.starts_with("people_masked_"))
        .unwrap();

    let content = std::fs::read_to_string(dir.path().join(written)).unwrap();
    assert!(content.starts_with("full_name,email,age\n"));
    assert!(!content.contains("Ada Lovelace"));
    assert!(!content.contains("ada@example.com"));
}

#[tokio::test]
async fn test_dry_run_still_reports_bad_input() {
    let (dir, _, config_path) = setup("");
    let broken = dir.path().join("broken.csv");
    std::fs::write(&broken, "a,b\n1,2,3\n").unwrap();

    let args = AnonymizeArgs {
        input: broken,
        output: None,
        seed: None,
        dry_run: true,
        column_types: Vec::new(),
    };
    assert_eq!(args.execute(&config_path).await.unwrap(), EXIT_INPUT_ERROR);
}

#[tokio::test]
async fn test_dry_run_skips_audit_log() {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("audit").join("runs.log");
    let config = format!(
        "[anonymization.audit]\nenabled = true\nlog_path = '{}'\n",
        audit_path.display()
    );
    let (_input_dir, input, config_path) = setup(&config);

    let dry = AnonymizeArgs {
        input: input.clone(),
        output: None,
        seed: Some(3),
        dry_run: true,
        column_types: Vec::new(),
    };
    assert_eq!(dry.execute(&config_path).await.unwrap(), EXIT_SUCCESS);
    assert!(!audit_path.exists());

    let real = AnonymizeArgs {
        input,
        output: Some(dir.path().join("out.csv")),
        seed: Some(3),
        dry_run: false,
        column_types: Vec::new(),
    };
    assert_eq!(real.execute(&config_path).await.unwrap(), EXIT_SUCCESS);
    assert!(audit_path.exists());
}
