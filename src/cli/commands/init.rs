//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: PathBuf,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        println!("📝 Initializing Sieve configuration");
        println!();

        if self.output.exists() && !self.force {
            println!(
                "❌ Configuration file already exists: {}",
                self.output.display()
            );
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output.display());
                println!("  2. Validate configuration: sieve validate-config");
                println!("  3. Try a record: sieve check '{{\"phone\": \"9876543210\"}}'");
                println!("  4. Run a scan: sieve scan input.csv -o redacted_output.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Sieve Configuration File

[application]
log_level = "info"

[input]
id_column = "record_id"
payload_columns = ["data_json", "Data_json", "Data_JSON"]

[output]
path = "redacted_output.csv"
compact_json = false

[processing]
batch_size = 1000
workers = 4

[audit]
enabled = false

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Sieve Configuration File
# PII classification and redaction for CSV record exports
#
# Every setting below is optional. Values shown are the defaults.
# Any value can be overridden with SIEVE_<SECTION>_<KEY>, for example
# SIEVE_PROCESSING_WORKERS=8. ${VAR} placeholders are substituted from the
# environment when the file is loaded.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Input CSV
# ============================================================================
[input]
# Column holding the record identifier
id_column = "record_id"

# Columns that may hold the JSON payload; the first non-empty one wins
payload_columns = ["data_json", "Data_json", "Data_JSON"]

# ============================================================================
# Output CSV
# ============================================================================
[output]
# Output file (scan -o overrides this)
path = "redacted_output.csv"

# Write JSON without spaces after ',' and ':'
compact_json = false

# ============================================================================
# Processing
# ============================================================================
[processing]
# Rows read per batch
batch_size = 1000

# Worker tasks per batch
workers = 4

# ============================================================================
# Classification Rules
# ============================================================================
[rules]
# Replacement field taxonomy; the built-in one is used when unset
# taxonomy_path = "taxonomy/field_taxonomy.toml"

# ============================================================================
# Audit Log
# ============================================================================
[audit]
# One entry per classified record; masked values are stored as SHA-256 digests
enabled = false
log_path = "./audit/sieve_audit.log"
json_format = true

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_generate_minimal_config_parses() {
        let config = parse_config(&InitArgs::generate_minimal_config()).unwrap();
        assert_eq!(config.input.id_column, "record_id");
        assert_eq!(config.processing.batch_size, 1000);
    }

    #[test]
    fn test_generate_config_with_examples_parses() {
        let content = InitArgs::generate_config_with_examples();
        assert!(content.contains("# Sieve Configuration File"));
        let config = parse_config(&content).unwrap();
        assert!(config.rules.taxonomy_path.is_none());
        assert!(!config.audit.enabled);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.clone(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs {
            output: path.clone(),
            with_examples: true,
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("[processing]"));
    }
}
