//! Core scan logic for Sieve.
//!
//! This module contains the CSV boundary around the PII engine.
//!
//! # Modules
//!
//! - [`processor`] - One row in, one row out: decode, classify, redact, encode
//! - [`pipeline`] - Batched, parallel scan from input CSV to output CSV
//! - [`summary`] - Counters reported at the end of a scan
//!
//! # Scan Workflow
//!
//! 1. **Read**: pull up to `processing.batch_size` rows from the input CSV
//! 2. **Fan out**: split the batch across `processing.workers` blocking tasks
//! 3. **Process**: each row is decoded, classified and redacted
//! 4. **Write**: rows are written back in input order
//! 5. **Report**: a [`summary::ScanSummary`] is returned
//!
//! # Example
//!
//! ```rust,no_run
//! use sieve::config::SieveConfig;
//! use sieve::core::pipeline::ScanCoordinator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = ScanCoordinator::new(SieveConfig::default(), shutdown_rx)?;
//!
//! let summary = coordinator
//!     .execute_scan(Path::new("input.csv"), Path::new("redacted_output.csv"))
//!     .await?;
//!
//! println!("Rows: {}", summary.total_rows);
//! println!("PII rows: {}", summary.pii_rows);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod processor;
pub mod summary;

pub use pipeline::ScanCoordinator;
pub use processor::{ProcessedRow, RawRow, RecordProcessor};
pub use summary::ScanSummary;
