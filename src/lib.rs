// Sieve - PII classification and redaction for CSV record exports
// Copyright (c) 2025 Sieve Contributors
// Licensed under the MIT License

//! # Sieve - PII classification and redaction
//!
//! Sieve decides, record by record, whether a JSON payload identifies a
//! person, and writes a copy of it with the identifying values masked.
//!
//! ## Overview
//!
//! A record is PII when it carries at least one **standalone identifier**
//! (phone number, national id, passport, payment handle) or at least two
//! **quasi-identifier signals** (full name, email, complete address, device
//! or network address tied to a user). Standalone identifiers are always
//! masked; quasi-identifiers are masked only when the record is PII through
//! the combinatorial rule.
//!
//! ## Architecture
//!
//! - [`pii`] - Taxonomy, patterns, detectors, classifier and masking (pure)
//! - [`core`] - Row processing and the batched CSV scan pipeline
//! - [`domain`] - Record model, value coercion and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface and argument parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sieve::config::SieveConfig;
//! use sieve::core::ScanCoordinator;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     let coordinator = ScanCoordinator::new(SieveConfig::default(), shutdown_rx)?;
//!
//!     let summary = coordinator
//!         .execute_scan(Path::new("records.csv"), Path::new("redacted_output.csv"))
//!         .await?;
//!
//!     println!("{} of {} rows contained PII", summary.pii_rows, summary.total_rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Single Records
//!
//! ```rust
//! use sieve::pii::PiiEngine;
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = PiiEngine::builtin()?;
//! let record = json!({"name": "Asha Verma", "email": "asha@mail.com"})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let (redacted, is_pii) = engine.classify_and_redact(record);
//! assert!(is_pii);
//! assert_eq!(redacted["email"], "asXXX@mail.com");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! The scan boundary uses [`domain::SieveError`]. Problems with a single
//! row's payload are not errors: the row is passed through and counted.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod pii;
