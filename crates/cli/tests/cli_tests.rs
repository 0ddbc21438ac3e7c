use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("peak-catalog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mountain catalog service"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("peak-catalog").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_bootstrap_help() {
    let mut cmd = Command::cargo_bin("peak-catalog").unwrap();
    cmd.arg("bootstrap")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"));
}
