//! Domain error types
//!
//! This module defines the error hierarchy for Sieve. Errors raised at the
//! I/O boundary (CSV files, configuration, audit log) are fatal and flow
//! through [`SieveError`]. The classification core itself never fails.

use thiserror::Error;

/// Main Sieve error type
///
/// This is the primary error type used by the configuration, logging and
/// scan pipeline layers. Third-party error types are converted into string
/// payloads so callers never depend on them.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Field taxonomy or pattern library could not be built
    #[error("Rule set error: {0}")]
    Rules(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV framing or encoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A worker task panicked or was cancelled
    #[error("Worker error: {0}")]
    Worker(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Per-row conditions that are reported but never abort a scan
///
/// These never surface as `Err`; they are attached to the processed row so
/// the pipeline can count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCondition {
    /// The payload column was missing or empty
    EmptyPayload,

    /// The payload was not valid JSON, or not a JSON object
    MalformedPayload,
}

impl RowCondition {
    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmptyPayload => "empty_payload",
            Self::MalformedPayload => "malformed_payload",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SieveError {
    fn from(err: std::io::Error) -> Self {
        SieveError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SieveError {
    fn from(err: serde_json::Error) -> Self {
        SieveError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SieveError {
    fn from(err: toml::de::Error) -> Self {
        SieveError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for SieveError {
    fn from(err: csv::Error) -> Self {
        SieveError::Csv(err.to_string())
    }
}

impl From<tokio::task::JoinError> for SieveError {
    fn from(err: tokio::task::JoinError) -> Self {
        SieveError::Worker(err.to_string())
    }
}

impl From<anyhow::Error> for SieveError {
    fn from(err: anyhow::Error) -> Self {
        SieveError::Rules(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_error_display() {
        let err = SieveError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: SieveError = io_err.into();
        assert!(matches!(err, SieveError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SieveError = json_err.into();
        assert!(matches!(err, SieveError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: SieveError = toml_err.into();
        assert!(matches!(err, SieveError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_anyhow_error_conversion_keeps_context() {
        let inner = anyhow::anyhow!("unknown category: shoe_size").context("Failed to load taxonomy");
        let err: SieveError = inner.into();
        assert!(matches!(err, SieveError::Rules(_)));
        assert!(err.to_string().contains("shoe_size"));
    }

    #[test]
    fn test_row_condition_labels() {
        assert_eq!(RowCondition::EmptyPayload.label(), "empty_payload");
        assert_eq!(RowCondition::MalformedPayload.label(), "malformed_payload");
    }

    #[test]
    fn test_sieve_error_implements_std_error() {
        let err = SieveError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
