//! Redaction engine
//!
//! Produces a copy of the record with sensitive values masked. Field set and
//! field order never change; only values are rewritten, always to strings.
//!
//! Two passes run in order:
//! 1. **Standalone pass**, regardless of the verdict: phone, national id,
//!    passport, and payment-handle fields whose value matches the category's
//!    trigger pattern.
//! 2. **Quasi-identifier pass**, only when the record is PII and its
//!    combinatorial score (computed on the unmasked record) is at least 2:
//!    email, full name, given/surname pair, address, network address, and
//!    device id fields.

use crate::domain::{is_present, value_text, Record};
use crate::pii::detector::CombinatorialScorer;
use crate::pii::masking::mask;
use crate::pii::models::{MaskedField, PiiCategory, Redaction, Verdict, COMBINATORIAL_THRESHOLD};
use crate::pii::rules::PiiRules;
use serde_json::Value;

/// Quasi-identifier categories, in the order they are masked
const QUASI_ORDER: [PiiCategory; 5] = [
    PiiCategory::Email,
    PiiCategory::FullName,
    PiiCategory::Address,
    PiiCategory::NetworkAddress,
    PiiCategory::DeviceId,
];

/// Applies masking functions to records
pub struct RedactionEngine<'a> {
    rules: &'a PiiRules,
}

impl<'a> RedactionEngine<'a> {
    /// Create an engine over a shared rule set
    pub fn new(rules: &'a PiiRules) -> Self {
        Self { rules }
    }

    /// Redact `record` given only its PII flag
    ///
    /// The combinatorial score gating the quasi-identifier pass is recomputed
    /// from `record`, which must be the original, unmasked record.
    pub fn redact(&self, record: &Record, is_pii: bool) -> Redaction {
        let quasi = is_pii
            && CombinatorialScorer::new(self.rules).score(record) >= COMBINATORIAL_THRESHOLD;
        self.apply(record, quasi)
    }

    /// Redact `record` using a verdict already computed for it
    pub fn redact_with_verdict(&self, record: &Record, verdict: &Verdict) -> Redaction {
        self.apply(record, verdict.requires_quasi_redaction())
    }

    fn apply(&self, record: &Record, quasi: bool) -> Redaction {
        let mut redacted = record.clone();
        let mut masked = Vec::new();

        self.mask_standalone(&mut redacted, &mut masked);
        if quasi {
            self.mask_quasi_identifiers(&mut redacted, &mut masked);
        }

        Redaction {
            record: redacted,
            masked,
        }
    }

    fn mask_standalone(&self, record: &mut Record, masked: &mut Vec<MaskedField>) {
        for (field, value) in record.iter_mut() {
            if value.is_null() {
                continue;
            }

            let text = value_text(value).into_owned();
            let category = PiiCategory::STANDALONE.into_iter().find(|category| {
                self.rules.taxonomy.is_field(*category, field)
                    && self
                        .rules
                        .patterns
                        .redaction_trigger(*category)
                        .is_some_and(|trigger| trigger.is_match(&text))
            });

            if let Some(category) = category {
                *value = Value::String(mask(&self.rules.patterns, category, &text));
                masked.push(MaskedField {
                    field: field.clone(),
                    category,
                    original: text,
                });
            }
        }
    }

    fn mask_quasi_identifiers(&self, record: &mut Record, masked: &mut Vec<MaskedField>) {
        for category in QUASI_ORDER {
            for (field, value) in record.iter_mut() {
                if !self.rules.taxonomy.is_field(category, field) || !self.qualifies(category, value)
                {
                    continue;
                }
                let text = value_text(value).into_owned();
                *value = Value::String(mask(&self.rules.patterns, category, &text));
                masked.push(MaskedField {
                    field: field.clone(),
                    category,
                    original: text,
                });
            }

            if category == PiiCategory::FullName {
                self.mask_name_pair(record, masked);
            }
        }
    }

    fn mask_name_pair(&self, record: &mut Record, masked: &mut Vec<MaskedField>) {
        let Some(pair) = self.rules.taxonomy.name_pair() else {
            return;
        };
        let both_present = record.get(&pair.given).is_some_and(is_present)
            && record.get(&pair.surname).is_some_and(is_present);
        if !both_present {
            return;
        }

        for field in [&pair.given, &pair.surname] {
            if let Some(value) = record.get_mut(field) {
                let text = value_text(value).into_owned();
                *value = Value::String(mask(&self.rules.patterns, PiiCategory::FullName, &text));
                masked.push(MaskedField {
                    field: field.clone(),
                    category: PiiCategory::FullName,
                    original: text,
                });
            }
        }
    }

    /// Whether a quasi-identifier value has the shape its mask expects
    fn qualifies(&self, category: PiiCategory, value: &Value) -> bool {
        if !is_present(value) {
            return false;
        }
        match category {
            PiiCategory::Email => self.rules.patterns.email().is_match(&value_text(value)),
            PiiCategory::FullName => self.rules.patterns.alpha_tokens(&value_text(value)) >= 2,
            _ => true,
        }
    }
}
