//! Scan summary and reporting
//!
//! This module defines the structure for tracking and reporting scan results.

use crate::core::processor::ProcessedRow;
use crate::domain::RowCondition;
use crate::pii::PiiCategory;
use std::collections::BTreeMap;
use std::time::Duration;

/// Summary of a scan
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Rows read from the input
    pub total_rows: usize,

    /// Rows classified as PII
    pub pii_rows: usize,

    /// Rows classified as not PII (including empty and malformed payloads)
    pub clean_rows: usize,

    /// Rows without a payload
    pub empty_payloads: usize,

    /// Rows whose payload was not a JSON object
    pub malformed_payloads: usize,

    /// Masked field count per category
    pub masked_by_category: BTreeMap<PiiCategory, usize>,

    /// Duration of the scan
    pub duration: Duration,

    /// Stopped early by a shutdown signal
    pub interrupted: bool,

    /// No output was written
    pub dry_run: bool,
}

impl ScanSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Count one processed row
    pub fn record_row(&mut self, row: &ProcessedRow) {
        self.total_rows += 1;
        if row.is_pii {
            self.pii_rows += 1;
        } else {
            self.clean_rows += 1;
        }

        match row.condition {
            Some(RowCondition::EmptyPayload) => self.empty_payloads += 1,
            Some(RowCondition::MalformedPayload) => self.malformed_payloads += 1,
            None => {}
        }

        if let Some(output) = &row.output {
            for masked in &output.redaction.masked {
                *self.masked_by_category.entry(masked.category).or_default() += 1;
            }
        }
    }

    /// Total masked fields across categories
    pub fn total_masked(&self) -> usize {
        self.masked_by_category.values().sum()
    }

    /// Share of rows flagged as PII, as a percentage
    pub fn pii_rate(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        (self.pii_rows as f64 / self.total_rows as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_scan_complete!(self.total_rows, self.pii_rows, self.duration);
        tracing::info!(
            clean_rows = self.clean_rows,
            empty_payloads = self.empty_payloads,
            malformed_payloads = self.malformed_payloads,
            masked_fields = self.total_masked(),
            pii_rate = format!("{:.2}%", self.pii_rate()),
            interrupted = self.interrupted,
            dry_run = self.dry_run,
            "Scan summary"
        );

        if self.malformed_payloads > 0 {
            tracing::warn!(
                count = self.malformed_payloads,
                "Rows with malformed payloads were passed through unredacted"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processor::{RawRow, RecordProcessor};
    use crate::pii::PiiEngine;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = ScanSummary::new();
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.total_masked(), 0);
        assert_eq!(summary.pii_rate(), 0.0);
        assert!(!summary.interrupted);
    }

    #[test]
    fn test_record_rows() {
        let processor = RecordProcessor::new(PiiEngine::builtin().unwrap(), false);
        let rows = vec![
            RawRow::new("1", Some(r#"{"phone": "9876543210"}"#.to_string())),
            RawRow::new(
                "2",
                Some(r#"{"name": "Asha Verma", "email": "asha@mail.com"}"#.to_string()),
            ),
            RawRow::new("3", None),
            RawRow::new("4", Some("not json".to_string())),
        ];

        let mut summary = ScanSummary::new();
        for row in processor.process_rows(rows).unwrap() {
            summary.record_row(&row);
        }

        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.pii_rows, 2);
        assert_eq!(summary.clean_rows, 2);
        assert_eq!(summary.empty_payloads, 1);
        assert_eq!(summary.malformed_payloads, 1);
        assert_eq!(summary.masked_by_category[&PiiCategory::Phone], 1);
        assert_eq!(summary.masked_by_category[&PiiCategory::Email], 1);
        assert_eq!(summary.masked_by_category[&PiiCategory::FullName], 1);
        assert_eq!(summary.total_masked(), 3);
        assert_eq!(summary.pii_rate(), 50.0);
    }

    #[test]
    fn test_with_duration() {
        let summary = ScanSummary::new().with_duration(Duration::from_millis(1500));
        assert_eq!(summary.duration, Duration::from_millis(1500));
    }
}
