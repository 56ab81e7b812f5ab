//! PII classification and redaction
//!
//! This module is the rule engine: it decides whether a record identifies a
//! person and produces a masked copy of it. Everything here is a pure
//! function of one record plus immutable, shared rules. No I/O, no logging,
//! no state carried between records.
//!
//! # Architecture
//!
//! - **Taxonomy** ([`taxonomy`]): which field names carry which category
//! - **Patterns** ([`patterns`]): compiled regexes for digits, emails, handles
//! - **Detection** ([`detector`]): standalone identifiers and the
//!   combinatorial quasi-identifier score
//! - **Classification** ([`classifier`]): the single PII verdict
//! - **Redaction** ([`redaction`], [`masking`]): category-specific masks
//! - **Audit** ([`audit`]): hashed per-record log, written by the caller
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve::pii::PiiEngine;
//!
//! let engine = PiiEngine::builtin()?;
//! let (redacted, is_pii) = engine.classify_and_redact(record);
//! ```

pub mod audit;
pub mod classifier;
pub mod detector;
pub mod engine;
pub mod masking;
pub mod models;
pub mod patterns;
pub mod redaction;
pub mod rules;
pub mod taxonomy;

// Re-export main types
pub use engine::{EngineOutput, PiiEngine};
pub use models::{MaskedField, PiiCategory, Redaction, Signals, Verdict};
pub use rules::PiiRules;
