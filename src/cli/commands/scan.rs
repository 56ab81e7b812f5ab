//! Scan command implementation
//!
//! This module implements the `scan` command, which classifies and redacts
//! every row of an input CSV file.

use crate::config::{load_config_or_default, SieveConfig};
use crate::core::pipeline::ScanCoordinator;
use crate::core::summary::ScanSummary;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input CSV with a record id column and a JSON payload column
    pub input: PathBuf,

    /// Output CSV (overrides output.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Classify and redact without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Override processing.workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Override processing.batch_size
    #[arg(long)]
    pub batch_size: Option<usize>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(
        &self,
        config_path: Option<&Path>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        let output = config.output.path.clone();

        let coordinator = match ScanCoordinator::new(config, shutdown_signal) {
            Ok(c) => c.with_dry_run(self.dry_run),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load classification rules");
                eprintln!("Failed to load classification rules: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no output will be written");
            println!("🔍 DRY RUN MODE - No output file will be written");
            println!();
        }

        println!("🚀 Scanning {}...", self.input.display());
        println!();

        let summary = match coordinator.execute_scan(&self.input, &output).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Scan failed");
                eprintln!("Scan failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        Self::print_summary(&summary);

        let exit_code = if summary.interrupted {
            println!("⚠️  Scan interrupted. Rows read so far were written.");
            tracing::info!("Scan interrupted by user signal");
            130 // SIGINT exit code (standard Unix convention)
        } else {
            if !self.dry_run {
                println!("✅ Scan completed: {}", output.display());
            } else {
                println!("✅ Dry run completed");
            }
            0
        };

        Ok(exit_code)
    }

    fn apply_overrides(&self, config: &mut SieveConfig) {
        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding output path from CLI");
            config.output.path = output.clone();
        }
        if let Some(workers) = self.workers {
            tracing::info!(workers, "Overriding worker count from CLI");
            config.processing.workers = workers;
        }
        if let Some(batch_size) = self.batch_size {
            tracing::info!(batch_size, "Overriding batch size from CLI");
            config.processing.batch_size = batch_size;
        }
    }

    fn print_summary(summary: &ScanSummary) {
        println!("📊 Scan Summary:");
        println!("  Total Rows: {}", summary.total_rows);
        println!("  PII Rows: {}", summary.pii_rows);
        println!("  Clean Rows: {}", summary.clean_rows);
        println!("  Empty Payloads: {}", summary.empty_payloads);
        println!("  Malformed Payloads: {}", summary.malformed_payloads);
        println!("  PII Rate: {:.2}%", summary.pii_rate());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

        if !summary.masked_by_category.is_empty() {
            println!();
            println!("🔒 Masked Fields:");
            for (category, count) in &summary.masked_by_category {
                println!("  {category}: {count}");
            }
        }
        println!();
    }
}
