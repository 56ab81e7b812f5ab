//! Configuration management for Sieve.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Sieve reads an optional `sieve.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SIEVE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sieve::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sieve.toml")?;
//!
//! println!("Batch size: {}", config.processing.batch_size);
//! println!("Workers: {}", config.processing.workers);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`InputConfig`] - Id column and payload column candidates
//! - [`OutputConfig`] - Output path and JSON layout
//! - [`ProcessingConfig`] - Batch size and worker count
//! - [`RulesConfig`] - Optional replacement field taxonomy
//! - [`AuditConfig`] - Per-record audit log
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! id_column = "record_id"
//! payload_columns = ["data_json", "Data_json", "Data_JSON"]
//!
//! [output]
//! path = "redacted_output.csv"
//!
//! [processing]
//! batch_size = 1000
//! workers = 4
//!
//! [audit]
//! enabled = true
//! log_path = "${SIEVE_AUDIT_DIR}/sieve_audit.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{
    ApplicationConfig, AuditConfig, InputConfig, LoggingConfig, OutputConfig, ProcessingConfig,
    RulesConfig, SieveConfig,
};
