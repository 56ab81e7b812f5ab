//! Row processor
//!
//! Turns one input row (identifier plus raw JSON payload) into one output row
//! (identifier, redacted JSON text, verdict). Payload problems are recorded on
//! the row as a [`RowCondition`] and never fail the scan.

use crate::domain::{Record, Result, RowCondition, SieveError};
use crate::pii::{EngineOutput, PiiEngine};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

/// Placeholder written for rows without a payload
pub const EMPTY_PAYLOAD_JSON: &str = "{}";

/// One input row as read from the CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Record identifier, empty when the column is missing
    pub record_id: String,
    /// First non-empty payload column, if any
    pub payload: Option<String>,
}

impl RawRow {
    /// Create a raw row
    pub fn new(record_id: impl Into<String>, payload: Option<String>) -> Self {
        Self {
            record_id: record_id.into(),
            payload,
        }
    }
}

/// One output row plus what happened while producing it
#[derive(Debug, Clone)]
pub struct ProcessedRow {
    /// Record identifier, copied from the input row
    pub record_id: String,
    /// Redacted JSON text, `{}` for empty payloads, raw text for malformed ones
    pub redacted_json: String,
    /// Final verdict
    pub is_pii: bool,
    /// Set when the engine was bypassed
    pub condition: Option<RowCondition>,
    /// Engine details, present whenever the engine ran
    pub output: Option<EngineOutput>,
}

/// Writes JSON with `", "` and `": "` separators
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode a record as JSON text, spaced or compact
pub fn encode_record(record: &Record, compact: bool) -> Result<String> {
    if compact {
        return Ok(serde_json::to_string(record)?);
    }

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    record.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| SieveError::Serialization(e.to_string()))
}

/// Decodes, classifies, redacts and re-encodes rows
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    engine: PiiEngine,
    compact_json: bool,
}

impl RecordProcessor {
    /// Create a processor around a shared engine
    pub fn new(engine: PiiEngine, compact_json: bool) -> Self {
        Self {
            engine,
            compact_json,
        }
    }

    /// Engine used by this processor
    pub fn engine(&self) -> &PiiEngine {
        &self.engine
    }

    /// Process one row
    ///
    /// # Errors
    ///
    /// Only fails if the redacted record cannot be encoded.
    pub fn process_row(&self, row: RawRow) -> Result<ProcessedRow> {
        let RawRow { record_id, payload } = row;

        let Some(payload) = payload.filter(|p| !p.is_empty()) else {
            return Ok(ProcessedRow {
                record_id,
                redacted_json: EMPTY_PAYLOAD_JSON.to_string(),
                is_pii: false,
                condition: Some(RowCondition::EmptyPayload),
                output: None,
            });
        };

        let record = match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Object(record)) => record,
            Ok(_) | Err(_) => {
                tracing::debug!(record_id = %record_id, "Payload is not a JSON object, passing through");
                return Ok(ProcessedRow {
                    record_id,
                    redacted_json: payload,
                    is_pii: false,
                    condition: Some(RowCondition::MalformedPayload),
                    output: None,
                });
            }
        };

        let output = self.engine.process(&record);
        let redacted_json = encode_record(&output.redaction.record, self.compact_json)?;

        Ok(ProcessedRow {
            record_id,
            redacted_json,
            is_pii: output.verdict.is_pii,
            condition: None,
            output: Some(output),
        })
    }

    /// Process a chunk of rows in order
    pub fn process_rows(&self, rows: Vec<RawRow>) -> Result<Vec<ProcessedRow>> {
        rows.into_iter().map(|row| self.process_row(row)).collect()
    }
}
