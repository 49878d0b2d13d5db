use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn check_reports_notices_and_summary() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("check")
        .arg(fixture("fixtures/policy_warnings.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("established_term"))
        .stdout(predicate::str::contains("will not be rendered"))
        .stdout(predicate::str::contains("rules=0"))
        .stdout(predicate::str::contains("warnings=2"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("check")
        .arg(fixture("fixtures/policy_warnings.toml"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode failed"));
}

#[test]
fn check_emits_json_report() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("check")
        .arg(fixture("fixtures/policy_basic.json"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rules\": 3"))
        .stdout(predicate::str::contains("\"services\": 1"));
}

#[test]
fn check_clean_policy_passes_strict() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("check")
        .arg(fixture("fixtures/policy_basic.json"))
        .arg("--strict")
        .assert()
        .success();
}
