//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sieve::logging::init_logging;
//! use sieve::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Scan started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a scan
///
/// # Example
///
/// ```no_run
/// use sieve::log_scan_start;
///
/// log_scan_start!("input.csv", "redacted_output.csv");
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($input:expr, $output:expr) => {
        tracing::info!(
            input = %$input,
            output = %$output,
            "Starting scan"
        );
    };
}

/// Log the completion of a scan
///
/// # Example
///
/// ```no_run
/// use sieve::log_scan_complete;
/// use std::time::Duration;
///
/// log_scan_complete!(1000, 37, Duration::from_secs(2));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($rows:expr, $pii_rows:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            pii_rows = $pii_rows,
            duration_ms = $duration.as_millis(),
            "Scan completed"
        );
    };
}

/// Log a batch processing operation
///
/// # Example
///
/// ```no_run
/// use sieve::log_batch_processing;
///
/// log_batch_processing!(3, 1000);
/// ```
#[macro_export]
macro_rules! log_batch_processing {
    ($batch:expr, $rows:expr) => {
        tracing::debug!(batch = $batch, rows = $rows, "Processing batch");
    };
}
