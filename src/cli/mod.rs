//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sieve using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Sieve - PII classification and redaction for CSV record exports
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version, about, long_about = None)]
#[command(author = "Sieve Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./sieve.toml when present)
    #[arg(short, long, env = "SIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIEVE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Explicitly requested configuration file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify and redact every row of a CSV file
    Scan(commands::scan::ScanArgs),

    /// Classify and redact a single JSON record
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["sieve", "scan", "input.csv"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.input, PathBuf::from("input.csv"));
                assert!(args.output.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_scan_with_overrides() {
        let cli = Cli::parse_from([
            "sieve",
            "scan",
            "input.csv",
            "-o",
            "out.csv",
            "--dry-run",
            "--workers",
            "8",
            "--batch-size",
            "500",
        ]);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert!(args.dry_run);
                assert_eq!(args.workers, Some(8));
                assert_eq!(args.batch_size, Some(500));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["sieve", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config_path(), Some(Path::new("custom.toml")));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["sieve", "--log-level", "debug", "check", "{}"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["sieve", "check", "-"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["sieve", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sieve", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
