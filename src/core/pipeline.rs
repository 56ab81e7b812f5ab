//! Scan coordinator
//!
//! Reads the input CSV in batches, fans each batch out to blocking worker
//! tasks, and writes the processed rows back in input order. A shutdown
//! signal is honoured between batches.

use crate::config::{InputConfig, SieveConfig};
use crate::core::processor::{ProcessedRow, RawRow, RecordProcessor};
use crate::core::summary::ScanSummary;
use crate::domain::{Result, SieveError};
use crate::pii::audit::AuditLogger;
use crate::pii::PiiEngine;
use csv::StringRecord;
use futures::future::try_join_all;
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tokio::sync::watch;

/// Header of the output CSV
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Column positions resolved from the input header
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnLayout {
    id: Option<usize>,
    payloads: Vec<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord, input: &InputConfig) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);
        Self {
            id: position(input.id_column.as_str()),
            payloads: input
                .payload_columns
                .iter()
                .filter_map(|column| position(column.as_str()))
                .collect(),
        }
    }

    fn raw_row(&self, record: &StringRecord) -> RawRow {
        let record_id = self
            .id
            .and_then(|index| record.get(index))
            .unwrap_or_default();
        let payload = self
            .payloads
            .iter()
            .filter_map(|&index| record.get(index))
            .find(|value| !value.is_empty())
            .map(str::to_string);
        RawRow::new(record_id, payload)
    }
}

/// Orchestrates a scan from input CSV to output CSV
pub struct ScanCoordinator {
    config: SieveConfig,
    processor: RecordProcessor,
    shutdown_signal: watch::Receiver<bool>,
    dry_run: bool,
}

impl ScanCoordinator {
    /// Create a coordinator, loading the rule set named by the configuration
    pub fn new(config: SieveConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        let engine = PiiEngine::from_taxonomy_path(config.rules.taxonomy_path.as_deref())?;
        Ok(Self::with_engine(config, engine, shutdown_signal))
    }

    /// Create a coordinator around an existing engine
    pub fn with_engine(
        config: SieveConfig,
        engine: PiiEngine,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Self {
        let processor = RecordProcessor::new(engine, config.output.compact_json);
        Self {
            config,
            processor,
            shutdown_signal,
            dry_run: false,
        }
    }

    /// Classify and redact without writing the output file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the scan
    ///
    /// # Errors
    ///
    /// Any I/O or CSV framing error on input, output, or audit log is fatal.
    /// Per-row payload problems are counted in the summary instead.
    pub async fn execute_scan(&self, input: &Path, output: &Path) -> Result<ScanSummary> {
        let start = Instant::now();
        let mut summary = ScanSummary::new();
        summary.dry_run = self.dry_run;

        crate::log_scan_start!(
            input.display(),
            if self.dry_run {
                "(dry run)".to_string()
            } else {
                output.display().to_string()
            }
        );

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(input)
            .map_err(|e| {
                SieveError::Io(format!("Failed to open input {}: {}", input.display(), e))
            })?;
        let layout = ColumnLayout::from_headers(reader.headers()?, &self.config.input);

        if layout.id.is_none() {
            tracing::warn!(
                column = %self.config.input.id_column,
                "Identifier column not found, record ids will be empty"
            );
        }
        if layout.payloads.is_empty() {
            tracing::warn!(
                columns = ?self.config.input.payload_columns,
                "No payload column found, every row will be treated as empty"
            );
        }

        let mut writer = if self.dry_run {
            None
        } else {
            Some(open_output(output)?)
        };

        let mut audit = if self.config.audit.enabled {
            let logger = AuditLogger::new(
                self.config.audit.log_path.clone(),
                self.config.audit.json_format,
            )
            .map_err(|e| SieveError::Io(format!("{e:#}")))?;
            tracing::info!(path = %logger.path().display(), "Audit logging enabled");
            Some(logger)
        } else {
            None
        };

        let batch_size = self.config.processing.batch_size.max(1);
        let mut record = StringRecord::new();
        let mut batch_number = 0usize;

        loop {
            if *self.shutdown_signal.borrow() {
                tracing::warn!(
                    rows = summary.total_rows,
                    "Shutdown signal received, stopping scan"
                );
                summary.interrupted = true;
                break;
            }

            let mut batch = Vec::with_capacity(batch_size);
            while batch.len() < batch_size && reader.read_record(&mut record)? {
                batch.push(layout.raw_row(&record));
            }
            if batch.is_empty() {
                break;
            }

            batch_number += 1;
            crate::log_batch_processing!(batch_number, batch.len());

            let processed = self.process_batch(batch).await?;

            for row in &processed {
                summary.record_row(row);

                if let (Some(logger), Some(output)) = (audit.as_mut(), row.output.as_ref()) {
                    logger
                        .log_record(&row.record_id, output)
                        .map_err(|e| SieveError::Io(format!("{e:#}")))?;
                }

                if let Some(writer) = writer.as_mut() {
                    write_row(writer, row)?;
                }
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }
        if let Some(logger) = audit.as_mut() {
            logger
                .flush()
                .map_err(|e| SieveError::Io(format!("{e:#}")))?;
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Process one batch across the configured workers, keeping input order
    async fn process_batch(&self, rows: Vec<RawRow>) -> Result<Vec<ProcessedRow>> {
        let total = rows.len();
        let workers = self.config.processing.workers.max(1);
        let chunk_size = total.div_ceil(workers).max(1);

        let mut rows = rows.into_iter();
        let mut chunks = Vec::with_capacity(workers);
        loop {
            let chunk: Vec<RawRow> = rows.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            chunks.push(chunk);
        }

        let tasks = chunks.into_iter().map(|chunk| {
            let processor = self.processor.clone();
            tokio::task::spawn_blocking(move || processor.process_rows(chunk))
        });

        let mut processed = Vec::with_capacity(total);
        for chunk in try_join_all(tasks).await? {
            processed.extend(chunk?);
        }
        Ok(processed)
    }
}

fn open_output(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        SieveError::Io(format!("Failed to create output {}: {}", path.display(), e))
    })?;
    writer.write_record(OUTPUT_HEADER)?;
    Ok(writer)
}

fn write_row(writer: &mut csv::Writer<File>, row: &ProcessedRow) -> Result<()> {
    writer.write_record([
        row.record_id.as_str(),
        row.redacted_json.as_str(),
        if row.is_pii { "true" } else { "false" },
    ])?;
    Ok(())
}
