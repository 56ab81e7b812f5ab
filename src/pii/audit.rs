//! Audit logger for classification results
//!
//! Writes one entry per classified record. Masked values are recorded only as
//! SHA-256 digests; plaintext PII never reaches the audit file.

use crate::pii::engine::EngineOutput;
use crate::pii::models::MaskedField;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    record_id: &'a str,
    is_pii: bool,
    standalone: bool,
    combinatorial_score: u8,
    signals: Vec<&'static str>,
    masked: Vec<AuditMaskedField<'a>>,
}

/// Masked field entry (with hashed original value)
#[derive(Debug, Serialize)]
struct AuditMaskedField<'a> {
    field: &'a str,
    category: &'static str,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    writer: BufWriter<File>,
}

impl AuditLogger {
    /// Open (or create) the audit log for appending
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open audit log: {}", log_path.display()))?;

        Ok(Self {
            log_path,
            json_format,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the audit file
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Record the outcome for one record
    pub fn log_record(&mut self, record_id: &str, output: &EngineOutput) -> Result<()> {
        let verdict = &output.verdict;
        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            record_id,
            is_pii: verdict.is_pii,
            standalone: verdict.standalone,
            combinatorial_score: verdict.combinatorial_score,
            signals: verdict.signals.active(),
            masked: output
                .redaction
                .masked
                .iter()
                .map(Self::audit_masked_field)
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Flush buffered entries to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush audit log: {}", self.log_path.display()))
    }

    fn audit_masked_field(masked: &MaskedField) -> AuditMaskedField<'_> {
        AuditMaskedField {
            field: &masked.field,
            category: masked.category.label(),
            value_hash: hash_pii_value(&masked.original),
        }
    }

    fn write_entry(&mut self, entry: &AuditLogEntry<'_>) -> Result<()> {
        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(self.writer, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let fields: Vec<String> = entry
                .masked
                .iter()
                .map(|m| format!("{}:{}", m.field, m.category))
                .collect();
            writeln!(
                self.writer,
                "[{}] Record: {} | PII: {} | Score: {} | Masked: {}",
                entry.timestamp,
                entry.record_id,
                entry.is_pii,
                entry.combinatorial_score,
                if fields.is_empty() {
                    "-".to_string()
                } else {
                    fields.join(",")
                }
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

impl Drop for AuditLogger {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
