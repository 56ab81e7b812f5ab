//! Main PII engine
//!
//! This module provides [`PiiEngine`], the entry point the record processor
//! uses to classify and redact one parsed record at a time.
//!
//! # Examples
//!
//! ```
//! use sieve::pii::PiiEngine;
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = PiiEngine::builtin()?;
//!
//! let record = json!({"phone": "9876543210", "city": "Pune"})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let (redacted, is_pii) = engine.classify_and_redact(record);
//! assert!(is_pii);
//! assert_eq!(redacted["phone"], "98XXXXXX10");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::domain::Record;
use crate::pii::classifier;
use crate::pii::models::{Redaction, Verdict};
use crate::pii::redaction::RedactionEngine;
use crate::pii::rules::PiiRules;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Result of running the engine over one record
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Classification of the original record
    pub verdict: Verdict,
    /// Redacted record and the fields that were masked
    pub redaction: Redaction,
}

/// Classification and redaction engine
///
/// # Thread Safety
///
/// The engine holds only an `Arc` to immutable rules, so it is cheap to clone
/// and safe to share across worker threads without locking.
#[derive(Debug, Clone)]
pub struct PiiEngine {
    rules: Arc<PiiRules>,
}

impl PiiEngine {
    /// Create an engine over a rule set
    pub fn new(rules: PiiRules) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Create an engine with the built-in taxonomy
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PiiRules::builtin()?))
    }

    /// Create an engine with the built-in taxonomy, or the one at `taxonomy_path`
    pub fn from_taxonomy_path(taxonomy_path: Option<&Path>) -> Result<Self> {
        let rules = match taxonomy_path {
            Some(path) => PiiRules::with_taxonomy_file(path)?,
            None => PiiRules::builtin()?,
        };
        Ok(Self::new(rules))
    }

    /// Rules this engine applies
    pub fn rules(&self) -> &PiiRules {
        &self.rules
    }

    /// Classify a record
    pub fn classify(&self, record: &Record) -> Verdict {
        classifier::classify(&self.rules, record)
    }

    /// Redact a record given its PII flag
    pub fn redact(&self, record: &Record, is_pii: bool) -> Record {
        RedactionEngine::new(&self.rules).redact(record, is_pii).record
    }

    /// Classify and redact, keeping the verdict details and masked fields
    pub fn process(&self, record: &Record) -> EngineOutput {
        let verdict = self.classify(record);
        let redaction = RedactionEngine::new(&self.rules).redact_with_verdict(record, &verdict);
        EngineOutput { verdict, redaction }
    }

    /// Classify and redact, returning the redacted record and the PII flag
    pub fn classify_and_redact(&self, record: Record) -> (Record, bool) {
        let output = self.process(&record);
        (output.redaction.record, output.verdict.is_pii)
    }
}
