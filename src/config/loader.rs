//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SieveConfig;
use crate::domain::errors::SieveError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_PATH: &str = "sieve.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SieveConfig
/// 4. Applies environment variable overrides (SIEVE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sieve::config::loader::load_config;
///
/// let config = load_config("sieve.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SieveConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SieveError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SieveError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration, falling back to defaults when no file is found
///
/// An explicitly requested file must exist. When `path` is `None` the
/// default `sieve.toml` is used if present; otherwise the built-in defaults
/// apply, still subject to `SIEVE_*` overrides and validation.
pub fn load_config_or_default(path: Option<&Path>) -> Result<SieveConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            let mut config = SieveConfig::default();
            apply_env_overrides(&mut config)?;
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Parses configuration text that has already been read
pub fn parse_config(contents: &str) -> Result<SieveConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: SieveConfig = toml::from_str(&contents)
        .map_err(|e| SieveError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &SieveConfig) -> Result<()> {
    config.validate().map_err(|e| {
        SieveError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SieveError::Configuration(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Leave comments untouched
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SieveError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SIEVE_* prefix
///
/// Environment variables follow the pattern: SIEVE_<SECTION>_<KEY>
/// For example: SIEVE_PROCESSING_WORKERS, SIEVE_AUDIT_ENABLED
fn apply_env_overrides(config: &mut SieveConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SIEVE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Input overrides
    if let Ok(val) = std::env::var("SIEVE_INPUT_ID_COLUMN") {
        config.input.id_column = val;
    }
    if let Ok(val) = std::env::var("SIEVE_INPUT_PAYLOAD_COLUMNS") {
        config.input.payload_columns = val
            .split(',')
            .map(|column| column.trim().to_string())
            .filter(|column| !column.is_empty())
            .collect();
    }

    // Output overrides
    if let Ok(val) = std::env::var("SIEVE_OUTPUT_PATH") {
        config.output.path = val.into();
    }
    if let Ok(val) = std::env::var("SIEVE_OUTPUT_COMPACT_JSON") {
        config.output.compact_json = val.parse().unwrap_or(false);
    }

    // Processing overrides
    if let Ok(val) = std::env::var("SIEVE_PROCESSING_BATCH_SIZE") {
        config.processing.batch_size = parse_number("SIEVE_PROCESSING_BATCH_SIZE", &val)?;
    }
    if let Ok(val) = std::env::var("SIEVE_PROCESSING_WORKERS") {
        config.processing.workers = parse_number("SIEVE_PROCESSING_WORKERS", &val)?;
    }

    // Rules overrides
    if let Ok(val) = std::env::var("SIEVE_RULES_TAXONOMY_PATH") {
        config.rules.taxonomy_path = Some(val.into());
    }

    // Audit overrides
    if let Ok(val) = std::env::var("SIEVE_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIEVE_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }
    if let Ok(val) = std::env::var("SIEVE_AUDIT_JSON_FORMAT") {
        config.audit.json_format = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SIEVE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIEVE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SIEVE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_number(name: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        SieveError::Configuration(format!("{} must be a positive integer, got '{}'", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SIEVE_TEST_SUBST_VAR", "test_value");
        let input = "path = \"${SIEVE_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result.trim_end(), "path = \"test_value\"");
        std::env::remove_var("SIEVE_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SIEVE_TEST_MISSING_VAR");
        let input = "path = \"${SIEVE_TEST_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# path = \"${SIEVE_TEST_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SIEVE_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_explicit_missing_file() {
        let result = load_config_or_default(Some(Path::new("/nonexistent/sieve.toml")));
        assert!(matches!(result, Err(SieveError::Configuration(_))));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("X", " 8 ").unwrap(), 8);
        assert!(parse_number("X", "eight").is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[input]
id_column = "id"
payload_columns = ["payload"]

[output]
path = "out.csv"
compact_json = true

[processing]
batch_size = 250
workers = 2

[audit]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.input.id_column, "id");
        assert_eq!(config.input.payload_columns, vec!["payload"]);
        assert!(config.output.compact_json);
        assert_eq!(config.processing.batch_size, 250);
        assert_eq!(config.processing.workers, 2);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[processing]\nbatch_size = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }
}
