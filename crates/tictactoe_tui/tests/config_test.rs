//! Tests for loading and overriding the view configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use tictactoe_tui::{Cli, ViewConfig};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults() {
    let config = ViewConfig::default();
    assert_eq!(config.result_flash(), Duration::from_millis(1500));
    assert_eq!(config.tick(), Duration::from_millis(100));
    assert!(*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "mouse = false\n");

    let config = ViewConfig::from_file(&path).expect("Load failed");

    assert!(!*config.mouse());
    assert_eq!(*config.result_flash_ms(), 1500);
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"result_flash_ms = 800
tick_ms = 50
mouse = true
log_file = "game.log"
"#,
    );

    let config = ViewConfig::from_file(&path).expect("Load failed");

    assert_eq!(config.result_flash(), Duration::from_millis(800));
    assert_eq!(config.tick(), Duration::from_millis(50));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_unknown_key_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "colour = \"red\"\n");

    let err = ViewConfig::from_file(&path).expect_err("unknown key accepted");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "tick_ms = 0\n");

    let err = ViewConfig::from_file(&path).expect_err("zero tick accepted");
    assert!(err.message.contains("tick_ms"));
}

#[test]
fn test_missing_file_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ViewConfig::from_file(dir.path().join("absent.toml")).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "result_flash_ms = 800\nlog_file = \"file.log\"\n");
    let cli = Cli {
        config: Some(path),
        log_file: Some(PathBuf::from("cli.log")),
        no_mouse: true,
        result_flash_ms: Some(250),
    };

    let config = ViewConfig::resolve(&cli).expect("Resolve failed");

    assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
    assert!(!*config.mouse());
    assert_eq!(config.result_flash(), Duration::from_millis(250));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let config = ViewConfig::resolve(&Cli::default()).expect("Resolve failed");
    assert_eq!(config, ViewConfig::default());
}
