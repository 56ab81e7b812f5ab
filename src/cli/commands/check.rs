//! Check command implementation
//!
//! Runs a single JSON record through the same row processor the scan uses
//! and prints the redacted record and its verdict.

use crate::config::load_config_or_default;
use crate::core::processor::{ProcessedRow, RawRow, RecordProcessor};
use crate::pii::PiiEngine;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::Path;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON object to check, or `-` to read it from stdin
    pub record: String,

    /// Also print the combinatorial score, signals and masked fields
    #[arg(long)]
    pub explain: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let engine = match PiiEngine::from_taxonomy_path(config.rules.taxonomy_path.as_deref()) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("Failed to load classification rules: {e:#}");
                return Ok(2);
            }
        };

        let payload = self.read_payload()?;
        let processor = RecordProcessor::new(engine, config.output.compact_json);
        let row = processor.process_row(RawRow::new("-", Some(payload)))?;

        println!("{}", row.redacted_json);
        println!("is_pii: {}", row.is_pii);

        if let Some(condition) = row.condition {
            eprintln!("⚠️  Record was not classified: {}", condition.label());
        }
        if self.explain {
            Self::print_explanation(&row);
        }

        Ok(0)
    }

    fn read_payload(&self) -> anyhow::Result<String> {
        if self.record != "-" {
            return Ok(self.record.clone());
        }

        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read record from stdin")?;
        Ok(buf.trim_end().to_string())
    }

    fn print_explanation(row: &ProcessedRow) {
        let Some(output) = &row.output else {
            return;
        };
        let verdict = &output.verdict;

        println!("standalone: {}", verdict.standalone);
        println!("combinatorial_score: {}", verdict.combinatorial_score);
        println!("signals: {}", verdict.signals.active().join(", "));
        for masked in &output.redaction.masked {
            println!("masked: {} ({})", masked.field, masked.category);
        }
    }
}
