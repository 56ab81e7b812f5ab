//! Pattern library for PII detection
//!
//! A fixed set of compiled patterns, built once and shared read-only by every
//! detector and masking function. Digit classes are ASCII only.

use crate::pii::models::PiiCategory;
use anyhow::{Context, Result};
use regex::Regex;

const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const PAYMENT_HANDLE: &str = r"\b[A-Za-z0-9._-]{2,}@[A-Za-z]{2,}\b";
const PASSPORT: &str = r"\b[A-Z][0-9]{7}\b";
const TEN_DIGITS: &str = r"\b[0-9]{10}\b";
const TEN_DIGIT_RUN: &str = r"[0-9]{10}";
const TWELVE_DIGITS: &str = r"\b[0-9]{12}\b";
const TWELVE_DIGIT_RUN: &str = r"[0-9]{12}";
const POSTAL_CODE: &str = r"\b[0-9]{6}\b";
const ALPHA_TOKEN: &str = r"[A-Za-z]+";

/// Compiled pattern set
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    email: Regex,
    payment_handle: Regex,
    passport: Regex,
    ten_digits: Regex,
    ten_digit_run: Regex,
    twelve_digits: Regex,
    twelve_digit_run: Regex,
    postal_code: Regex,
    alpha_token: Regex,
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Invalid {name} pattern: {pattern}"))
}

impl PatternLibrary {
    /// Compile the built-in patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: compile("email", EMAIL)?,
            payment_handle: compile("payment handle", PAYMENT_HANDLE)?,
            passport: compile("passport", PASSPORT)?,
            ten_digits: compile("phone", TEN_DIGITS)?,
            ten_digit_run: compile("phone locator", TEN_DIGIT_RUN)?,
            twelve_digits: compile("national id", TWELVE_DIGITS)?,
            twelve_digit_run: compile("national id locator", TWELVE_DIGIT_RUN)?,
            postal_code: compile("postal code", POSTAL_CODE)?,
            alpha_token: compile("alphabetic token", ALPHA_TOKEN)?,
        })
    }

    /// Pattern that makes a value of `category` count as detected
    ///
    /// Only the standalone categories and email carry a detection pattern.
    pub fn detection_pattern(&self, category: PiiCategory) -> Option<&Regex> {
        match category {
            PiiCategory::Phone => Some(&self.ten_digits),
            PiiCategory::NationalId => Some(&self.twelve_digits),
            PiiCategory::Passport => Some(&self.passport),
            PiiCategory::PaymentHandle => Some(&self.payment_handle),
            PiiCategory::Email => Some(&self.email),
            PiiCategory::FullName
            | PiiCategory::Address
            | PiiCategory::NetworkAddress
            | PiiCategory::DeviceId => None,
        }
    }

    /// Pattern that triggers the unconditional masking pass for `category`
    ///
    /// Phone and national id use an unbounded digit run, so a number embedded
    /// in a longer run of digits is still masked.
    pub fn redaction_trigger(&self, category: PiiCategory) -> Option<&Regex> {
        match category {
            PiiCategory::Phone => Some(&self.ten_digit_run),
            PiiCategory::NationalId => Some(&self.twelve_digit_run),
            PiiCategory::Passport => Some(&self.passport),
            PiiCategory::PaymentHandle => Some(&self.payment_handle),
            _ => None,
        }
    }

    /// Email address pattern
    pub fn email(&self) -> &Regex {
        &self.email
    }

    /// Passport number pattern
    pub fn passport(&self) -> &Regex {
        &self.passport
    }

    /// Unbounded 10-digit run
    pub fn ten_digit_run(&self) -> &Regex {
        &self.ten_digit_run
    }

    /// Unbounded 12-digit run
    pub fn twelve_digit_run(&self) -> &Regex {
        &self.twelve_digit_run
    }

    /// 6-digit postal code
    pub fn postal_code(&self) -> &Regex {
        &self.postal_code
    }

    /// Count alphabetic tokens in `text`
    pub fn alpha_tokens(&self, text: &str) -> usize {
        self.alpha_token.find_iter(text).count()
    }
}
