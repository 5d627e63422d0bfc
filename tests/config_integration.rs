//! Integration tests for the plank-config crate.

use std::fs;

use plank_config::Config;
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("plank.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for plank
            demo_items: true,
            poll_interval_ms: 250,  // slower redraws
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert!(config.demo_items);
    assert_eq!(config.poll_interval_ms, 250);
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        demo_items: true,
        poll_interval_ms: 150,
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn config_saved_file_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let config = Config {
        demo_items: false,
        poll_interval_ms: 75,
    };
    config.save_to(&config_path).unwrap();

    let content = fs::read_to_string(&config_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["demo_items"], false);
    assert_eq!(parsed["poll_interval_ms"], 75);
}

#[test]
fn config_load_nonexistent_path_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(result.is_err());
}

#[test]
fn config_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("plank.json");

    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_validation_bounds() {
    let dir = TempDir::new().unwrap();

    for (interval, ok) in [(0u64, false), (10, true), (10_000, true), (10_001, false)] {
        let config_path = dir.path().join(format!("plank-{interval}.json"));
        fs::write(
            &config_path,
            format!(r#"{{"poll_interval_ms": {interval}}}"#),
        )
        .unwrap();

        let result = Config::load_from(&config_path);
        assert_eq!(result.is_ok(), ok, "interval = {interval}");
    }
}

#[test]
fn config_rejects_malformed_files() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("plank.json5");

    fs::write(&config_path, "{ demo_items: }").unwrap();

    assert!(Config::load_from(&config_path).is_err());
}
