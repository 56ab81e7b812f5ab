//! Combinatorial quasi-identifier scoring
//!
//! Counts how many of five quasi-identifying signals hold at once. Each
//! signal is evaluated from scratch against the record; none of them reads
//! another signal's result except through the shared user-context rule.

use crate::domain::{is_present, value_text, Record};
use crate::pii::models::{PiiCategory, Signals};
use crate::pii::rules::PiiRules;

/// Scores records by their quasi-identifying signals
pub struct CombinatorialScorer<'a> {
    rules: &'a PiiRules,
}

impl<'a> CombinatorialScorer<'a> {
    /// Create a scorer over a shared rule set
    pub fn new(rules: &'a PiiRules) -> Self {
        Self { rules }
    }

    /// Number of signals present, in `0..=5`
    pub fn score(&self, record: &Record) -> u8 {
        self.signals(record).score()
    }

    /// Evaluate all five signals
    pub fn signals(&self, record: &Record) -> Signals {
        let full_name = self.has_full_name(record);
        let email = self.has_email(record);
        let user_context = full_name || email || self.has_phone_field(record);

        Signals {
            full_name,
            email,
            complete_address: self.has_complete_address(record),
            device_with_context: user_context
                && self.has_present_field(record, PiiCategory::DeviceId),
            network_with_context: user_context
                && self.has_present_field(record, PiiCategory::NetworkAddress),
        }
    }

    /// Whether a value reads as a complete name (two or more alphabetic tokens)
    pub fn is_complete_name(&self, text: &str) -> bool {
        self.rules.patterns.alpha_tokens(text) >= 2
    }

    fn has_full_name(&self, record: &Record) -> bool {
        let full_name_field = record.iter().any(|(field, value)| {
            self.rules.taxonomy.is_field(PiiCategory::FullName, field)
                && is_present(value)
                && self.is_complete_name(&value_text(value))
        });

        full_name_field || self.has_name_pair(record)
    }

    fn has_name_pair(&self, record: &Record) -> bool {
        self.rules.taxonomy.name_pair().is_some_and(|pair| {
            record.get(&pair.given).is_some_and(is_present)
                && record.get(&pair.surname).is_some_and(is_present)
        })
    }

    fn has_email(&self, record: &Record) -> bool {
        let pattern = self.rules.patterns.email();
        record.iter().any(|(field, value)| {
            self.rules.taxonomy.is_field(PiiCategory::Email, field)
                && is_present(value)
                && pattern.is_match(&value_text(value))
        })
    }

    fn has_complete_address(&self, record: &Record) -> bool {
        let mut address_text = String::new();
        for (field, value) in record {
            if self.rules.taxonomy.is_field(PiiCategory::Address, field) && is_present(value) {
                address_text.push_str(&value_text(value));
                address_text.push(' ');
            }
        }
        if address_text.is_empty() {
            return false;
        }

        // A context key holding null still counts as present
        let has_context = record.iter().any(|(field, value)| {
            self.rules.taxonomy.address_context(field).is_some()
                && (value.is_null() || !value_text(value).trim().is_empty())
        });

        has_context || self.rules.patterns.postal_code().is_match(&address_text)
    }

    /// Any phone field counts as user context, whatever it holds
    fn has_phone_field(&self, record: &Record) -> bool {
        record
            .keys()
            .any(|field| self.rules.taxonomy.is_field(PiiCategory::Phone, field))
    }

    fn has_present_field(&self, record: &Record, category: PiiCategory) -> bool {
        record
            .iter()
            .any(|(field, value)| self.rules.taxonomy.is_field(category, field) && is_present(value))
    }
}
