//! Runs the binary for the one-shot subcommands.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::temp_config;

fn voogle_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_voogle"));
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

fn run(config: &Path, args: &[&str]) -> Output {
    voogle_cmd(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_voogle"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["routes", "resolve", "open", "tui"] {
        assert!(stdout.contains(subcommand), "help misses {}", subcommand);
    }
    assert!(stdout.contains("--api-url"));
}

#[test]
fn test_routes_prints_table() {
    let (_dir, config) = temp_config("");
    let output = run(&config, &["routes"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("NAME"));
    assert!(stdout.contains("GalleryPage"));
    assert!(stdout.contains("lazy"));
}

#[test]
fn test_resolve_prints_match() {
    let (_dir, config) = temp_config("");
    let output = run(&config, &["resolve", "#/watch/123"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("route:    VideoPlayerPage"));
    assert!(stdout.contains("param:    id = 123"));
    assert!(stdout.contains("strategy: lazy"));
}

#[test]
fn test_open_login_needs_no_server() {
    let (_dir, config) = temp_config("[api]\nbase_url = \"http://127.0.0.1:9\"\n");
    let output = run(&config, &["open", "#/login"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("data-view=\"LoginPage\""));
    assert!(stdout.contains("type=\"password\""));
}

#[test]
fn test_open_lazy_page_without_credentials_fails() {
    let (_dir, config) = temp_config("[api]\nbase_url = \"http://127.0.0.1:9\"\n");
    let output = run(&config, &["open", "#/gallery"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not load GalleryPage"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config) = temp_config("[api]\nbase_url = \"ftp://videos\"\n");
    let output = run(&config, &["routes"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_api_url_flag_is_validated() {
    let (_dir, config) = temp_config("");
    let output = run(&config, &["--api-url", "not-a-url", "routes"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api.base_url"));
}
