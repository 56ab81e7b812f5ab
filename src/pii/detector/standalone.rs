//! Standalone identifier detection

use crate::domain::{value_text, Record};
use crate::pii::models::PiiCategory;
use crate::pii::rules::PiiRules;

/// Detects records carrying an identifier that is identifying on its own
pub struct StandaloneDetector<'a> {
    rules: &'a PiiRules,
}

impl<'a> StandaloneDetector<'a> {
    /// Create a detector over a shared rule set
    pub fn new(rules: &'a PiiRules) -> Self {
        Self { rules }
    }

    /// Whether any phone, national id, passport, or payment-handle field
    /// holds a value matching its pattern
    pub fn is_individually_identifying(&self, record: &Record) -> bool {
        self.first_match(record).is_some()
    }

    /// First field that makes the record identifying, with its category
    ///
    /// Categories are checked in taxonomy order, fields in record order.
    pub fn first_match<'r>(&self, record: &'r Record) -> Option<(&'r str, PiiCategory)> {
        for category in PiiCategory::STANDALONE {
            let Some(pattern) = self.rules.patterns.detection_pattern(category) else {
                continue;
            };

            let hit = record.iter().find(|(field, value)| {
                !value.is_null()
                    && self.rules.taxonomy.is_field(category, field)
                    && pattern.is_match(&value_text(value))
            });

            if let Some((field, _)) = hit {
                return Some((field.as_str(), category));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test_case(json!({"phone": "9876543210"}), Some(PiiCategory::Phone) ; "phone")]
    #[test_case(json!({"Mobile": 9876543210u64}), Some(PiiCategory::Phone) ; "numeric phone with mixed case field")]
    #[test_case(json!({"aadhar": "123456789012"}), Some(PiiCategory::NationalId) ; "aadhar")]
    #[test_case(json!({"passport": "P1234567"}), Some(PiiCategory::Passport) ; "passport")]
    #[test_case(json!({"upi_id": "asha@ybl"}), Some(PiiCategory::PaymentHandle) ; "upi")]
    #[test_case(json!({"phone": "98765"}), None ; "short phone")]
    #[test_case(json!({"phone": null}), None ; "null phone")]
    #[test_case(json!({"order_ref": "9876543210"}), None ; "digits in unrecognized field")]
    #[test_case(json!({"phone": "123456789012"}), None ; "national id shape in phone field")]
    fn test_first_match(value: Value, expected: Option<PiiCategory>) {
        let rules = PiiRules::builtin().unwrap();
        let detector = StandaloneDetector::new(&rules);
        let record = record(value);
        assert_eq!(detector.first_match(&record).map(|(_, c)| c), expected);
        assert_eq!(detector.is_individually_identifying(&record), expected.is_some());
    }

    #[test]
    fn test_first_match_reports_field_name() {
        let rules = PiiRules::builtin().unwrap();
        let detector = StandaloneDetector::new(&rules);
        let record = record(json!({"note": "x", "ALT_PHONE": "call 9876543210 now"}));
        assert_eq!(
            detector.first_match(&record),
            Some(("ALT_PHONE", PiiCategory::Phone))
        );
    }
}
