//! PII data models

use crate::domain::Record;
use serde::{Deserialize, Serialize};

/// Number of simultaneous quasi-identifying signals that make a record identifying
pub const COMBINATORIAL_THRESHOLD: u8 = 2;

/// PII category enumeration
///
/// The first four categories are standalone identifiers: one matching value is
/// enough to identify a person. The remaining five are quasi-identifiers that
/// only count in combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// 10-digit mobile numbers
    Phone,
    /// 12-digit national identity numbers (Aadhaar)
    NationalId,
    /// One uppercase letter followed by 7 digits
    Passport,
    /// UPI-style `handle@bank` payment addresses
    PaymentHandle,
    /// Email addresses
    Email,
    /// Full names, or a given-name and surname pair
    FullName,
    /// Street addresses
    Address,
    /// IPv4 addresses
    NetworkAddress,
    /// Hardware or installation identifiers
    DeviceId,
}

impl PiiCategory {
    /// Every category, in taxonomy order
    pub const ALL: [PiiCategory; 9] = [
        Self::Phone,
        Self::NationalId,
        Self::Passport,
        Self::PaymentHandle,
        Self::Email,
        Self::FullName,
        Self::Address,
        Self::NetworkAddress,
        Self::DeviceId,
    ];

    /// Categories masked by the unconditional redaction pass
    pub const STANDALONE: [PiiCategory; 4] = [
        Self::Phone,
        Self::NationalId,
        Self::Passport,
        Self::PaymentHandle,
    ];

    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "PHONE",
            Self::NationalId => "NATIONAL_ID",
            Self::Passport => "PASSPORT",
            Self::PaymentHandle => "PAYMENT_HANDLE",
            Self::Email => "EMAIL",
            Self::FullName => "FULL_NAME",
            Self::Address => "ADDRESS",
            Self::NetworkAddress => "NETWORK_ADDRESS",
            Self::DeviceId => "DEVICE_ID",
        }
    }

    /// Key used for this category in the taxonomy TOML
    pub fn taxonomy_key(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "national_id",
            Self::Passport => "passport",
            Self::PaymentHandle => "payment_handle",
            Self::Email => "email",
            Self::FullName => "full_name",
            Self::Address => "address",
            Self::NetworkAddress => "network_address",
            Self::DeviceId => "device_id",
        }
    }

    /// Parse a taxonomy key back into a category
    pub fn from_taxonomy_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.taxonomy_key() == key)
    }

    /// Check if a single value of this category identifies a person on its own
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            Self::Phone | Self::NationalId | Self::Passport | Self::PaymentHandle
        )
    }

    /// Field names in this category are compared case-sensitively
    pub fn is_case_sensitive(&self) -> bool {
        matches!(self, Self::FullName)
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The five quasi-identifying signals of the combinatorial scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// A full name, or a given-name and surname pair
    pub full_name: bool,
    /// A recognized email field holding an email address
    pub email: bool,
    /// An address together with city, state, or postal code
    pub complete_address: bool,
    /// A device identifier alongside user context
    pub device_with_context: bool,
    /// A network address alongside user context
    pub network_with_context: bool,
}

impl Signals {
    /// Number of true signals, in `0..=5`
    pub fn score(&self) -> u8 {
        [
            self.full_name,
            self.email,
            self.complete_address,
            self.device_with_context,
            self.network_with_context,
        ]
        .into_iter()
        .filter(|signal| *signal)
        .count() as u8
    }

    /// Names of the signals that are set
    pub fn active(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.full_name {
            names.push("full_name");
        }
        if self.email {
            names.push("email");
        }
        if self.complete_address {
            names.push("complete_address");
        }
        if self.device_with_context {
            names.push("device_with_context");
        }
        if self.network_with_context {
            names.push("network_with_context");
        }
        names
    }
}

/// Classification verdict for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// The PII flag surfaced to callers
    pub is_pii: bool,
    /// Number of quasi-identifying signals present, in `0..=5`
    pub combinatorial_score: u8,
    /// Whether a standalone identifier was found
    pub standalone: bool,
    /// The individual signals behind `combinatorial_score`
    pub signals: Signals,
}

impl Verdict {
    /// Build a verdict from the two detector outputs
    pub fn new(standalone: bool, signals: Signals) -> Self {
        let combinatorial_score = signals.score();
        Self {
            is_pii: standalone || combinatorial_score >= COMBINATORIAL_THRESHOLD,
            combinatorial_score,
            standalone,
            signals,
        }
    }

    /// Verdict for a record that could not be classified
    pub fn clean() -> Self {
        Self::new(false, Signals::default())
    }

    /// Whether the conditional (quasi-identifier) redaction pass applies
    pub fn requires_quasi_redaction(&self) -> bool {
        self.is_pii && self.combinatorial_score >= COMBINATORIAL_THRESHOLD
    }
}

/// A field rewritten by the redaction engine
#[derive(Debug, Clone)]
pub struct MaskedField {
    /// Field name as it appears in the record
    pub field: String,
    /// Category whose masking function was applied
    pub category: PiiCategory,
    /// Text of the value before masking (hashed in audit logs)
    pub original: String,
}

/// Output of the redaction engine
#[derive(Debug, Clone)]
pub struct Redaction {
    /// Redacted record with the same fields in the same order
    pub record: Record,
    /// Fields that were rewritten, in the order they were masked
    pub masked: Vec<MaskedField>,
}

impl Redaction {
    /// Check if any field was masked
    pub fn has_masked_fields(&self) -> bool {
        !self.masked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_key_round_trip() {
        for category in PiiCategory::ALL {
            assert_eq!(
                PiiCategory::from_taxonomy_key(category.taxonomy_key()),
                Some(category)
            );
        }
        assert_eq!(PiiCategory::from_taxonomy_key("shoe_size"), None);
    }

    #[test]
    fn test_standalone_categories() {
        for category in PiiCategory::ALL {
            assert_eq!(
                category.is_standalone(),
                PiiCategory::STANDALONE.contains(&category)
            );
        }
    }

    #[test]
    fn test_signals_score_and_names() {
        let signals = Signals {
            full_name: true,
            network_with_context: true,
            ..Signals::default()
        };
        assert_eq!(signals.score(), 2);
        assert_eq!(signals.active(), vec!["full_name", "network_with_context"]);
    }

    #[test]
    fn test_verdict_threshold() {
        let one = Signals {
            email: true,
            ..Signals::default()
        };
        let verdict = Verdict::new(false, one);
        assert!(!verdict.is_pii);
        assert!(!verdict.requires_quasi_redaction());

        let standalone = Verdict::new(true, one);
        assert!(standalone.is_pii);
        assert!(!standalone.requires_quasi_redaction());

        let two = Signals {
            email: true,
            complete_address: true,
            ..Signals::default()
        };
        let verdict = Verdict::new(false, two);
        assert!(verdict.is_pii);
        assert!(verdict.requires_quasi_redaction());
    }

    #[test]
    fn test_category_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&PiiCategory::NetworkAddress).unwrap();
        assert_eq!(json, "\"NETWORK_ADDRESS\"");
    }
}
