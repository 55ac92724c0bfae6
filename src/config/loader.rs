//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TabmaskConfig;
use crate::domain::errors::TabmaskError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "tabmask.toml";

const ENV_VAR_PATTERN: &str = r"\$\{([A-Z_][A-Z0-9_]*)\}";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`TabmaskConfig`]
/// 4. Applies environment variable overrides (`TABMASK_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, a
/// referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use tabmask::config::loader::load_config;
///
/// let config = load_config("tabmask.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TabmaskConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TabmaskError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TabmaskError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
pub fn load_config_from_str(contents: &str) -> Result<TabmaskConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: TabmaskConfig = toml::from_str(&contents)
        .map_err(|e| TabmaskError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        TabmaskError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads the configuration file, falling back to defaults
///
/// A missing file at the default location is not an error: built-in
/// defaults apply (with `TABMASK_*` overrides). A missing file at any other
/// explicitly given path is.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<TabmaskConfig> {
    let path = path.as_ref();

    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = TabmaskConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            TabmaskError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        return Ok(config);
    }

    load_config(path)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(ENV_VAR_PATTERN)
        .map_err(|e| TabmaskError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            result.push('\n');
        }

        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(TabmaskError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `TABMASK_*` prefix
///
/// Variables follow the pattern `TABMASK_<SECTION>_<KEY>`, for example
/// `TABMASK_APPLICATION_LOG_LEVEL` or `TABMASK_OUTPUT_DIRECTORY`.
fn apply_env_overrides(config: &mut TabmaskConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("TABMASK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("TABMASK_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("TABMASK_APPLICATION_DRY_RUN", &val)?;
    }

    // Input/output overrides
    if let Ok(val) = std::env::var("TABMASK_INPUT_DELIMITER") {
        config.input.delimiter = val;
    }
    if let Ok(val) = std::env::var("TABMASK_OUTPUT_DIRECTORY") {
        config.output.directory = Some(val.into());
    }
    if let Ok(val) = std::env::var("TABMASK_OUTPUT_DELIMITER") {
        config.output.delimiter = val;
    }
    if let Ok(val) = std::env::var("TABMASK_OUTPUT_SUFFIX") {
        config.output.suffix = val;
    }

    // Anonymization overrides
    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| TabmaskError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("TABMASK_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        TabmaskError::Configuration(format!("Invalid {name} value '{value}': expected true or false"))
    })
}
