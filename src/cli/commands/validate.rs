//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Sieve configuration file and the field taxonomy it names.

use crate::config::{load_config_or_default, DEFAULT_CONFIG_PATH};
use crate::pii::{PiiCategory, PiiRules};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let shown = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("{DEFAULT_CONFIG_PATH} (defaults if absent)"));
        tracing::info!(config_path = %shown, "Validating configuration");

        println!("🔍 Validating configuration file: {shown}");
        println!();

        // Loading also validates
        let config = match load_config_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        let rules = match &config.rules.taxonomy_path {
            Some(path) => PiiRules::with_taxonomy_file(path),
            None => PiiRules::builtin(),
        };
        let rules = match rules {
            Ok(r) => {
                println!("✅ Field taxonomy loaded");
                r
            }
            Err(e) => {
                println!("❌ Failed to load field taxonomy");
                println!("   Error: {e:#}");
                println!();
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Id Column: {}", config.input.id_column);
        println!("  Payload Columns: {:?}", config.input.payload_columns);
        println!("  Output: {}", config.output.path.display());
        println!("  Compact JSON: {}", config.output.compact_json);
        println!("  Batch Size: {}", config.processing.batch_size);
        println!("  Workers: {}", config.processing.workers);
        println!(
            "  Taxonomy: {}",
            config
                .rules
                .taxonomy_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!(
            "  Audit Log: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!();
        println!("Field Taxonomy:");
        for category in PiiCategory::ALL {
            let mut spellings: Vec<&str> = rules.taxonomy.spellings(category).collect();
            spellings.sort_unstable();
            println!("  {}: {}", category, spellings.join(", "));
        }
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "[processing]\nworkers = 2\n").unwrap();

        let code = ValidateArgs {}.execute(Some(&path)).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "[application]\nlog_level = \"loud\"\n").unwrap();

        let code = ValidateArgs {}.execute(Some(&path)).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_broken_taxonomy() {
        let dir = tempfile::tempdir().unwrap();
        let taxonomy = dir.path().join("taxonomy.toml");
        std::fs::write(&taxonomy, "[categories]\nshoe_size = [\"shoe\"]\n").unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(
            &path,
            format!("[rules]\ntaxonomy_path = {:?}\n", taxonomy.display().to_string()),
        )
        .unwrap();

        let code = ValidateArgs {}.execute(Some(&path)).await.unwrap();
        assert_eq!(code, 2);
    }
}
