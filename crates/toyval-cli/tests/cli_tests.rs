//! End-to-end tests of the `toyval` binary against the in-process Platform.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn toyval() -> Command {
    let mut cmd = Command::cargo_bin("toyval").unwrap();
    cmd.env_remove("TOYVAL_ENDPOINT")
        .env_remove("TOYVAL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_passes() {
    toyval()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("997549.50"))
        .stdout(predicate::str::contains("both checks passed"));
}

#[test]
fn test_demo_on_a_leap_day() {
    toyval()
        .args(["demo", "--as-of", "2024-02-29", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"as_of\": \"2024-02-29\""));
}

#[test]
fn test_value_minimal() {
    toyval()
        .args([
            "value",
            "--rate",
            "0.01",
            "--maturity",
            "90d",
            "--convention",
            "NoHolidays",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("997549.50"));
}

#[test]
fn test_value_json_defaults_convention() {
    toyval()
        .args(["value", "--rate", "0.02", "--maturity", "3m", "--as-of", "2025-01-15", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"convention\": \"NewYorkModFoll\""));
}

#[test]
fn test_unknown_convention_fails() {
    toyval()
        .args(["value", "--rate", "0.01", "--maturity", "90d", "--convention", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

#[test]
fn test_non_numeric_rate_rejected() {
    toyval()
        .args(["value", "--rate", "NaN", "--maturity", "90d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finite"));
}

#[test]
fn test_doc_prints_document() {
    toyval()
        .args(["doc", "--rate", "0.01", "--maturity", "90d", "--as-of", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root\": \"ValueProduct_4\""))
        .stdout(predicate::str::contains("\"function\": \"MaturityDate\""));
}

#[test]
fn test_config_file_default_convention() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[client]\ndefault_convention = \"NoHolidays\"").unwrap();

    toyval()
        .arg("--config")
        .arg(file.path())
        .args(["value", "--rate", "0.01", "--maturity", "90d", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"convention\": \"NoHolidays\""))
        .stdout(predicate::str::contains("997549.50"));
}

#[test]
fn test_bad_endpoint_rejected() {
    toyval()
        .args(["--endpoint", "localhost:8080", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("client.endpoint"));
}
