use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn translated_config(out_dir: &tempfile::TempDir) -> PathBuf {
    let out_path = out_dir.path().join("config.xml");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("translate")
        .arg(fixture("fixtures/policy_basic.json"))
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();
    out_path
}

#[test]
fn inspect_prints_tree_with_entry_names() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    let config = translated_config(&out_dir);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("inspect")
        .arg(&config)
        .arg("--depth")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("devices"))
        .stdout(predicate::str::contains("entry name=localhost.localdomain"));
}

#[test]
fn inspect_section_filters_to_one_child() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    let config = translated_config(&out_dir);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("inspect")
        .arg(&config)
        .arg("--section")
        .arg("devices")
        .arg("--depth")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("rulebase"))
        .stdout(predicate::str::contains("entry name=vsys1"));
}

#[test]
fn inspect_unknown_section_fails() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    let config = translated_config(&out_dir);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panfw-gen"));
    cmd.arg("inspect")
        .arg(&config)
        .arg("--section")
        .arg("no-such-section")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
