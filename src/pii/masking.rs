//! Category-specific masking functions
//!
//! Every function here is pure and total: unexpected input degrades to the
//! original text or to [`REDACTED_SENTINEL`], never to a panic. Masks keep
//! enough of the original shape to stay recognizable (leading and trailing
//! digits, first letters, domains) while removing the identifying middle.

use crate::pii::models::PiiCategory;
use crate::pii::patterns::PatternLibrary;

/// Replacement used when a value has no recognizable shape
pub const REDACTED_SENTINEL: &str = "[REDACTED_PII]";

/// Mask character
const MASK: char = 'X';

/// Apply the masking function for `category` to `text`
pub fn mask(patterns: &PatternLibrary, category: PiiCategory, text: &str) -> String {
    match category {
        PiiCategory::Phone => mask_phone(patterns, text),
        PiiCategory::NationalId => mask_national_id(patterns, text),
        PiiCategory::Passport => mask_passport(patterns, text),
        PiiCategory::PaymentHandle => mask_payment_handle(text),
        PiiCategory::Email => mask_email(text),
        PiiCategory::FullName => mask_name(text),
        PiiCategory::Address => mask_address(patterns, text),
        PiiCategory::NetworkAddress => mask_network_address(text),
        PiiCategory::DeviceId => mask_device_id(text),
    }
}

/// Keep the first 2 and last 2 digits of the first 10-digit run
pub fn mask_phone(patterns: &PatternLibrary, text: &str) -> String {
    let Some(found) = patterns.ten_digit_run().find(text) else {
        return text.to_string();
    };
    let digits = found.as_str();
    let masked = format!("{}XXXXXX{}", &digits[..2], &digits[8..]);
    text.replace(digits, &masked)
}

/// Keep the first 4 and last 4 digits of the first 12-digit run
pub fn mask_national_id(patterns: &PatternLibrary, text: &str) -> String {
    let Some(found) = patterns.twelve_digit_run().find(text) else {
        return text.to_string();
    };
    let digits = found.as_str();
    let masked = format!("{}XXXX{}", &digits[..4], &digits[8..]);
    text.replace(digits, &masked)
}

/// Keep the leading letter of the passport number
pub fn mask_passport(patterns: &PatternLibrary, text: &str) -> String {
    let Some(found) = patterns.passport().find(text) else {
        return text.to_string();
    };
    let number = found.as_str();
    let masked = format!("{}XXXXXXX", &number[..1]);
    text.replace(number, &masked)
}

/// Mask the handle's local part, keep the provider
pub fn mask_payment_handle(text: &str) -> String {
    match text.split_once('@') {
        Some((local, provider)) => format!("{}@{provider}", mask_local_part(local)),
        None => REDACTED_SENTINEL.to_string(),
    }
}

/// Mask the address's local part, keep the domain
pub fn mask_email(text: &str) -> String {
    match text.split_once('@') {
        Some((local, domain)) => format!("{}@{domain}", mask_local_part(local)),
        None => text.to_string(),
    }
}

fn mask_local_part(local: &str) -> String {
    if local.chars().count() <= 2 {
        "XX".to_string()
    } else {
        let head: String = local.chars().take(2).collect();
        format!("{head}XXX")
    }
}

/// Keep the first character of each whitespace-separated token
pub fn mask_name(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            let mut masked = String::with_capacity(token.len());
            if let Some(first) = chars.next() {
                masked.push(first);
            }
            masked.extend(chars.map(|_| MASK));
            masked
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep a 3-character prefix and any 6-digit postal code
pub fn mask_address(patterns: &PatternLibrary, text: &str) -> String {
    let prefix: String = text.chars().take(3).collect();
    match patterns.postal_code().find(text) {
        Some(postal) => format!("{prefix}XXX..., {}", postal.as_str()),
        None => format!("{prefix}XXX..."),
    }
}

/// Keep the first and last octet of a dotted IPv4 address
pub fn mask_network_address(text: &str) -> String {
    let octets: Vec<&str> = text.split('.').collect();
    match octets.as_slice() {
        [first, _, _, last] => format!("{first}.XXX.XXX.{last}"),
        _ => REDACTED_SENTINEL.to_string(),
    }
}

/// Keep 3 characters at each end of the identifier
pub fn mask_device_id(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 6 {
        return "XXXXXX".to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}XXX{tail}")
}
