//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so this
//! binary holds a single test that initializes it.

use sieve::config::{LoggingConfig, SieveConfig};
use sieve::core::ScanCoordinator;
use sieve::logging::init_logging;
use tempfile::TempDir;
use tokio::sync::watch;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[tokio::test]
async fn test_scan_events_reach_json_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_dir.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();

    let input = temp_dir.path().join("input.csv");
    std::fs::write(&input, "record_id,data_json\n1,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n")
        .unwrap();
    let (_tx, rx) = watch::channel(false);
    ScanCoordinator::new(SieveConfig::default(), rx)
        .unwrap()
        .execute_scan(&input, &temp_dir.path().join("out.csv"))
        .await
        .unwrap();

    // Dropping the guard flushes the non-blocking writer
    drop(guard);

    let content = std::fs::read_to_string(log_dir.join("sieve.log")).unwrap();
    let messages: Vec<String> = content
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|entry| entry["fields"]["message"].as_str().map(str::to_string))
        .collect();

    assert!(messages.iter().any(|m| m == "Starting scan"));
    assert!(messages.iter().any(|m| m == "Scan completed"));
    // Record values never appear in logs
    assert!(!content.contains("9876543210"));
}
