//! CLI Integration Tests
//!
//! These tests run the `folio` binary end-to-end. Commands that need GitHub
//! are pointed at a closed local port so they fail fast and offline.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Write a config file into `dir` and return a command that uses it
fn cli_cmd(dir: &TempDir, config: &str) -> Command {
    let path = dir.path().join("folio.toml");
    std::fs::write(&path, config).expect("Failed to write config");

    let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
    cmd.arg("--config").arg(&path);
    cmd
}

const UNREACHABLE_GITHUB: &str = r#"
[github]
username = "octocat"
api_base_url = "http://127.0.0.1:9"
timeout_secs = 2
"#;

// ============================================================================
// Skills Command Tests
// ============================================================================

#[test]
fn test_offline_skills_lists_configured_skills() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .args(["skills", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skills (6):"))
        .stdout(predicate::str::contains("React"))
        .stdout(predicate::str::contains("Cisco"))
        .stdout(predicate::str::contains("listed"))
        .stdout(predicate::str::contains("github").not());
}

#[test]
fn test_offline_skills_json_preserves_order() {
    let dir = TempDir::new().unwrap();
    let config = r##"
[skills]
static_skills = [
    { name = "Zig", color = "#ec915c" },
    { name = "Elixir", color = "#6e4a7e" },
]
"##;

    let output = cli_cmd(&dir, config)
        .args(["skills", "--offline", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let skills: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = skills
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Zig", "Elixir"]);
    assert_eq!(skills[0]["origin"], "static");
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .env_remove("RUST_LOG")
        .args(["-vv", "skills", "--offline"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded site configuration"))
        .stderr(predicate::str::contains("Merged skills"))
        .stdout(predicate::str::contains("Merged skills").not());
}

#[test]
fn test_quiet_by_default() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .env_remove("RUST_LOG")
        .args(["skills", "--offline"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_online_skills_fail_when_github_unreachable() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, UNREACHABLE_GITHUB)
        .arg("skills")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}

// ============================================================================
// Type Command Tests
// ============================================================================

#[test]
fn test_type_prints_full_text() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .args(["type", "hello folio", "--speed", "1", "--blink", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello folio"));
}

#[test]
fn test_type_empty_text_completes() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .args(["type", "", "--speed", "5"])
        .assert()
        .success();
}

#[test]
fn test_type_rejects_zero_speed() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .args(["type", "hello", "--speed", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_type_rejects_zero_blink() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "")
        .args(["type", "hello", "--blink", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cursor blink"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_prints_effective_values() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "display_name = \"Ada Lovelace\"\n")
        .args(["--username", "ada", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("display_name = \"Ada Lovelace\""))
        .stdout(predicate::str::contains("username = \"ada\""))
        .stdout(predicate::str::contains("typing_speed_ms = 90"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "featured_count = \"three\"\n")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load site configuration"));
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["--config", "/nonexistent/folio.toml", "config"])
        .assert()
        .failure();
}

// ============================================================================
// Network Command Tests
// ============================================================================

#[test]
fn test_projects_fail_when_github_unreachable() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, UNREACHABLE_GITHUB)
        .arg("projects")
        .assert()
        .failure();
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skills"))
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("type"));
}
