//! Configuration schema types
//!
//! This module defines the configuration structure for Sieve.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Sieve configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input CSV layout
    #[serde(default)]
    pub input: InputConfig,

    /// Output CSV settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Batching and parallelism
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Classification rules
    #[serde(default)]
    pub rules: RulesConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SieveConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.processing.validate()?;
        self.rules.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input CSV layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Columns that may hold the JSON payload, tried in order per row
    #[serde(default = "default_payload_columns")]
    pub payload_columns: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            payload_columns: default_payload_columns(),
        }
    }
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id_column.trim().is_empty() {
            return Err("input.id_column cannot be empty".to_string());
        }
        if self.payload_columns.is_empty() {
            return Err("input.payload_columns must list at least one column".to_string());
        }
        if self.payload_columns.iter().any(|c| c.trim().is_empty()) {
            return Err("input.payload_columns cannot contain empty names".to_string());
        }
        Ok(())
    }
}

/// Output CSV settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file written by `scan` when no path is given on the command line
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Write redacted JSON without spaces after separators
    #[serde(default)]
    pub compact_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            compact_json: false,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Batching and parallelism
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Rows read per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Blocking worker tasks per batch
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            workers: default_workers(),
        }
    }
}

impl ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 || self.batch_size > 100_000 {
            return Err(format!(
                "processing.batch_size must be between 1 and 100000, got {}",
                self.batch_size
            ));
        }
        if self.workers == 0 || self.workers > 256 {
            return Err(format!(
                "processing.workers must be between 1 and 256, got {}",
                self.workers
            ));
        }
        Ok(())
    }
}

/// Classification rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Replacement field taxonomy (TOML); the built-in one is used when unset
    #[serde(default)]
    pub taxonomy_path: Option<PathBuf>,
}

impl RulesConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.taxonomy_path {
            if !path.exists() {
                return Err(format!("Field taxonomy file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Field taxonomy must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Audit log settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the per-record audit log
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit entries
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_id_column() -> String {
    "record_id".to_string()
}

fn default_payload_columns() -> Vec<String> {
    vec![
        "data_json".to_string(),
        "Data_json".to_string(),
        "Data_JSON".to_string(),
    ]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("redacted_output.csv")
}

fn default_batch_size() -> usize {
    1000
}

fn default_workers() -> usize {
    4
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/sieve_audit.log")
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
