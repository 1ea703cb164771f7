use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("vitrina")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn test_play_help_shows_flags() {
    cargo_bin_cmd!("vitrina")
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--quick"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("vitrina")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("vitrina")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_unknown_theme_rejected() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("vitrina")
        .env("VITRINA_HOME", dir.path())
        .args(["--theme", "sepia", "play", "--quick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}
