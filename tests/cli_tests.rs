//! Integration tests for the gsa CLI
//!
//! These tests run the gsa binary with an isolated config directory.

use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for gsa that reads config only from `config_dir`
fn gsa(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gsa");
    cmd.env("GSA_CONFIG_DIR", config_dir)
        .env_remove("GSA_CONFIG")
        .env_remove("GSA_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: gsa"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gsa"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `gsa --help`"));
}

// ============================================================================
// traverse
// ============================================================================

#[test]
fn test_traverse_defaults_to_balanced_in_order() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .arg("traverse")
        .assert()
        .success()
        .stdout("in-order: 1 2 3 4 5 6 7\n");
}

#[test]
fn test_traverse_breadth_first_left_chain() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["traverse", "--order", "breadth-first", "--shape", "left-chain", "--depth", "3"])
        .assert()
        .success()
        .stdout("breadth-first: 3 2 1\n");
}

#[test]
fn test_traverse_in_order_alt_keeps_duplicates() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["traverse", "-o", "in-order-alt", "-s", "right-chain", "-d", "3"])
        .assert()
        .success()
        .stdout("in-order-alt: 1 1 2 2 3\n");
}

#[test]
fn test_traverse_empty_tree() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["traverse", "--depth", "0"])
        .assert()
        .success()
        .stdout("in-order: (empty)\n");
}

#[test]
fn test_traverse_quiet_prints_values_only() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["--quiet", "traverse", "--depth", "2"])
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn test_traverse_json_output() {
    let dir = tempdir().unwrap();
    let output = gsa(dir.path())
        .args(["--format", "json", "traverse", "--order", "bfs", "--depth", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["order"], "breadth-first");
    assert_eq!(json["shape"], "balanced");
    assert_eq!(json["depth"], 2);
    assert_eq!(json["node_count"], 3);
    assert_eq!(json["height"], 2);
    assert_eq!(json["values"], serde_json::json!([2, 1, 3]));
}

#[test]
fn test_traverse_depth_over_limit_is_usage_error() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["traverse", "--depth", "21"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid depth"));
}

#[test]
fn test_traverse_depth_over_limit_json_envelope() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["--format", "json", "traverse", "--depth", "25"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

#[test]
fn test_unknown_order_exit_code_2() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["traverse", "--order", "post-order"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_order_json_usage_error() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["--format", "json", "traverse", "--order", "post-order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["--format", "json", "--format", "human", "traverse"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["--format", "yaml", "traverse"])
        .assert()
        .code(2);
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_balanced_matches() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["compare", "--shape", "balanced", "--depth", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches: yes"))
        .stdout(predicate::str::contains("duplicated").not());
}

#[test]
fn test_compare_zigzag_reports_drift() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["compare", "--shape", "zigzag", "--depth", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical: 1 2 3"))
        .stdout(predicate::str::contains("alternate: 1 1 2"))
        .stdout(predicate::str::contains("matches: no"))
        .stdout(predicate::str::contains("duplicated: 1"))
        .stdout(predicate::str::contains("missing: 3"));
}

#[test]
fn test_compare_quiet_prints_verdict_only() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .args(["-q", "compare", "--shape", "left-chain"])
        .assert()
        .success()
        .stdout("matches: no\n");
}

#[test]
fn test_compare_json_output() {
    let dir = tempdir().unwrap();
    let output = gsa(dir.path())
        .args(["--format", "json", "compare", "--shape", "left-chain", "--depth", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["shape"], "left-chain");
    assert_eq!(json["matches"], false);
    assert_eq!(json["canonical"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["alternate"], serde_json::json!([1]));
    assert_eq!(json["duplicated"], serde_json::json!([]));
    assert_eq!(json["missing"], serde_json::json!([2, 3]));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_defaults_apply() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[defaults]\norder = \"breadth-first\"\nshape = \"left-chain\"\ndepth = 4\n",
    )
    .unwrap();

    gsa(dir.path())
        .arg("traverse")
        .assert()
        .success()
        .stdout("breadth-first: 4 3 2 1\n");
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[defaults]\norder = \"breadth-first\"\ndepth = 4\n",
    )
    .unwrap();

    gsa(dir.path())
        .args(["traverse", "--order", "in-order", "--depth", "1"])
        .assert()
        .success()
        .stdout("in-order: 1\n");
}

#[test]
fn test_config_format_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[defaults]\nformat = \"json\"\n").unwrap();

    let output = gsa(dir.path())
        .args(["traverse", "--depth", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["values"], serde_json::json!([1]));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[defaults]\nshape = \"right-chain\"\ndepth = 2\n").unwrap();

    gsa(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["traverse", "--order", "in-order-alt"])
        .assert()
        .success()
        .stdout("in-order-alt: 1 1 2\n");
}

#[test]
fn test_malformed_config_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[defaults\n").unwrap();

    gsa(dir.path())
        .arg("traverse")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("traverse")
        .assert()
        .code(3);
}

#[test]
fn test_config_path_from_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("from-env.toml");
    fs::write(&path, "[defaults]\nshape = \"left-chain\"\ndepth = 3\n").unwrap();

    gsa(dir.path())
        .env("GSA_CONFIG", &path)
        .args(["traverse", "--order", "breadth-first"])
        .assert()
        .success()
        .stdout("breadth-first: 3 2 1\n");
}

#[test]
fn test_config_directory_exit_code_2() {
    let dir = tempdir().unwrap();
    gsa(dir.path())
        .arg("--config")
        .arg(dir.path())
        .arg("traverse")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expects a file"));
}
