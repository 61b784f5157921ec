//! Tests for the `xpathset` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_prints_sorted_paths() {
    Command::cargo_bin("xpathset")
        .unwrap()
        .arg(fixture("mixed.xml"))
        .assert()
        .success()
        .stdout("/xml/with/an/@attribute\n/xml/with/an/element\n/xml/with/another/@attribute\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("xpathset")
        .unwrap()
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Not a file"));
}

#[test]
fn test_malformed_xml_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.xml");
    std::fs::write(&file, "<xml><open></xml>").unwrap();

    Command::cargo_bin("xpathset")
        .unwrap()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("XML parsing failed"));
}

#[test]
fn test_requires_file_argument() {
    Command::cargo_bin("xpathset")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_logs_stay_off_stdout() {
    Command::cargo_bin("xpathset")
        .unwrap()
        .env("RUST_LOG", "debug")
        .arg(fixture("catalog.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/catalog/@version\n"))
        .stdout(predicate::str::contains("Collected paths").not());
}
