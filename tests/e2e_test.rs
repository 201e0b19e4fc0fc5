/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("snakecage-report")
            .arg("tests/fixtures/suspicious_report.json")
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("snakecage-report").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("snakecage-report")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 0: unparseable report renders the empty state
    #[test]
    fn test_exit_code_malformed_report() {
        cargo_bin_cmd!("snakecage-report")
            .arg("tests/fixtures/malformed_report.json")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Report unavailable"))
            .stderr(predicate::str::contains("rendering empty state"));
    }

    /// Exit code 0: report bytes that are not UTF-8 render the empty state
    #[test]
    fn test_exit_code_non_utf8_report() {
        cargo_bin_cmd!("snakecage-report")
            .arg("tests/fixtures/non_utf8_report.json")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Report unavailable"))
            .stderr(predicate::str::contains("rendering empty state"));
    }

    /// Exit code 1: risk level meets --fail-on
    #[test]
    fn test_exit_code_risk_threshold_exceeded() {
        cargo_bin_cmd!("snakecage-report")
            .args(["tests/fixtures/suspicious_report.json", "--fail-on", "medium"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--fail-on threshold"));
    }

    /// Exit code 0: risk level below --fail-on
    #[test]
    fn test_exit_code_risk_below_threshold() {
        cargo_bin_cmd!("snakecage-report")
            .args(["tests/fixtures/scenario_report.json", "--fail-on", "high"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("snakecage-report")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: No report, history or sample given
    #[test]
    fn test_exit_code_missing_source() {
        cargo_bin_cmd!("snakecage-report").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("snakecage-report")
            .args(["tests/fixtures/scenario_report.json", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent report
    #[test]
    fn test_exit_code_application_error_missing_report() {
        cargo_bin_cmd!("snakecage-report")
            .arg("/nonexistent/report.json")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Analysis report not found"));
    }

    /// Exit code 3: Application error - history path is a file
    #[test]
    fn test_exit_code_application_error_history_not_directory() {
        cargo_bin_cmd!("snakecage-report")
            .args(["--history", "Cargo.toml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Not a directory"));
    }
}

#[test]
fn test_e2e_html_dashboard() {
    cargo_bin_cmd!("snakecage-report")
        .args(["tests/fixtures/suspicious_report.json", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("78/100"))
        .stdout(predicate::str::contains("Network Activity"))
        .stdout(predicate::str::contains("\"10:15:30\""))
        .stderr(predicate::str::contains("Rendering HTML dashboard"));
}

#[test]
fn test_e2e_html_escapes_untrusted_fields() {
    let assert = cargo_bin_cmd!("snakecage-report")
        .arg("tests/fixtures/xss_report.json")
        .assert()
        .success();
    let html = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert"));
    assert!(!html.contains("<svg"));
    assert!(!html.contains("<img"));
    assert!(html.contains("risk-unknown"));
}

#[test]
fn test_e2e_markdown_format() {
    cargo_bin_cmd!("snakecage-report")
        .args(["tests/fixtures/scenario_report.json", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# SnakeCage Analysis Report"))
        .stdout(predicate::str::contains("**Risk Score:** 42/100 (MEDIUM)"));
}

#[test]
fn test_e2e_json_format() {
    let assert = cargo_bin_cmd!("snakecage-report")
        .args(["tests/fixtures/scenario_report.json", "-f", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["status"], "ready");
    assert_eq!(json["timeline"][0]["type"], "net_connect");
    assert_eq!(json["timeline"][1]["type"], "file_write");
    assert_eq!(json["stdout"], "No output");
    assert_eq!(json["riskSummary"]["levelClass"], "risk-medium");
}

#[test]
fn test_e2e_max_points_limits_series() {
    let assert = cargo_bin_cmd!("snakecage-report")
        .args([
            "tests/fixtures/suspicious_report.json",
            "-f",
            "json",
            "--max-points",
            "2",
        ])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    for series in json["charts"].as_array().unwrap() {
        assert!(series["values"].as_array().unwrap().len() <= 2);
    }
}

#[test]
fn test_e2e_history_index() {
    let assert = cargo_bin_cmd!("snakecage-report")
        .args(["--history", "tests/fixtures/history", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping corrupt.json"));
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["executionId"], "run-b");
    assert_eq!(entries[1]["executionId"], "run-a");
    assert_eq!(json["skipped"], 1);
}

#[test]
fn test_e2e_history_fail_on() {
    cargo_bin_cmd!("snakecage-report")
        .args(["--history", "tests/fixtures/history", "--fail-on", "high"])
        .assert()
        .code(1);
}

#[test]
fn test_e2e_sample_code() {
    cargo_bin_cmd!("snakecage-report")
        .args(["--sample", "harmless"])
        .assert()
        .success()
        .stdout(predicate::str::contains("def fibonacci"));
}

#[test]
fn test_e2e_unknown_sample_is_empty() {
    cargo_bin_cmd!("snakecage-report")
        .args(["--sample", "ransomware"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dashboard.html");

    cargo_bin_cmd!("snakecage-report")
        .args(["tests/fixtures/scenario_report.json", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output complete"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("42/100"));
}

#[test]
fn test_e2e_output_file_missing_parent() {
    cargo_bin_cmd!("snakecage-report")
        .args([
            "tests/fixtures/scenario_report.json",
            "-o",
            "/nonexistent/dir/out.html",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Parent directory does not exist"));
}
