//! Record classification
//!
//! Combines the standalone detector and the combinatorial scorer into the
//! single PII verdict surfaced to callers.

use crate::domain::Record;
use crate::pii::detector::{CombinatorialScorer, StandaloneDetector};
use crate::pii::models::Verdict;
use crate::pii::rules::PiiRules;

/// Classify one record
///
/// `is_pii` is true when a standalone identifier is present or at least two
/// quasi-identifying signals hold. The verdict depends only on the record.
pub fn classify(rules: &PiiRules, record: &Record) -> Verdict {
    let standalone = StandaloneDetector::new(rules).is_individually_identifying(record);
    let signals = CombinatorialScorer::new(rules).signals(record);
    Verdict::new(standalone, signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_standalone_phone_is_pii() {
        let rules = PiiRules::builtin().unwrap();
        let verdict = classify(&rules, &record(json!({"phone": "9876543210"})));
        assert!(verdict.is_pii);
        assert!(verdict.standalone);
        assert_eq!(verdict.combinatorial_score, 0);
    }

    #[test]
    fn test_name_and_email_is_pii() {
        let rules = PiiRules::builtin().unwrap();
        let verdict = classify(
            &rules,
            &record(json!({"name": "Asha Verma", "email": "asha@mail.com"})),
        );
        assert!(verdict.is_pii);
        assert!(!verdict.standalone);
        assert_eq!(verdict.combinatorial_score, 2);
    }

    #[test]
    fn test_single_signal_is_not_pii() {
        let rules = PiiRules::builtin().unwrap();
        let verdict = classify(&rules, &record(json!({"name": "Asha Verma"})));
        assert!(!verdict.is_pii);
        assert_eq!(verdict.combinatorial_score, 1);

        let verdict = classify(
            &rules,
            &record(json!({"address": "221B Baker Street", "city": "Metropolis"})),
        );
        assert!(!verdict.is_pii);
        assert!(verdict.signals.complete_address);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let rules = PiiRules::builtin().unwrap();
        let input = record(json!({
            "first_name": "Asha",
            "last_name": "Verma",
            "device_id": "android-7781",
            "aadhar": "1234 5678 9012"
        }));
        let first = classify(&rules, &input);
        let second = classify(&rules, &input);
        assert_eq!(first, second);
        assert_eq!(first.combinatorial_score, 2);
        assert!(!first.standalone);
    }
}
