use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

/// Minimal show: one title, one code line, one task, one conversation.
const TINY_SHOW: &str = r#"
hero_titles = ["Hola Mundo"]
project_title = "Proyecto"
output_header = "Salida"
tasks = ["una tarea"]

[[code]]
plain = "print('hola')"

[[code.styled.spans]]
text = "print('hola')"
style = "plain"

[[conversations]]
opener = "hola"
follow_up = "adiós"
"#;

#[test]
fn test_play_quick_renders_show() {
    let home = tempdir().unwrap();
    let show_path = home.path().join("show.toml");
    fs::write(&show_path, TINY_SHOW).unwrap();

    cargo_bin_cmd!("vitrina")
        .env("VITRINA_HOME", home.path())
        .args(["--script"])
        .arg(&show_path)
        .args(["play", "--quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hola Mundo"))
        .stdout(predicate::str::contains("print('hola')"))
        .stdout(predicate::str::contains("== Salida =="))
        .stdout(predicate::str::contains("○ una tarea"))
        .stdout(predicate::str::contains("✔ #1"));
}

#[test]
fn test_play_json_emits_event_lines() {
    let home = tempdir().unwrap();
    let show_path = home.path().join("show.toml");
    fs::write(&show_path, TINY_SHOW).unwrap();

    let assert = cargo_bin_cmd!("vitrina")
        .env("VITRINA_HOME", home.path())
        .args(["--script"])
        .arg(&show_path)
        .args(["play", "--quick", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // Title first, then the demo run bracketed by reset/finished.
    assert_eq!(events[0]["type"], "title");
    assert_eq!(events[0]["text"], "Hola Mundo");
    assert_eq!(events[1]["type"], "reset");
    assert_eq!(events.last().unwrap()["type"], "finished");

    assert!(events.iter().any(|e| e["type"] == "line_committed"));
    assert!(events.iter().any(|e| e["type"] == "item_completed"));
}

#[test]
fn test_play_rejects_invalid_show() {
    let home = tempdir().unwrap();
    let show_path = home.path().join("show.toml");
    fs::write(&show_path, "hero_titles = []\n").unwrap();

    cargo_bin_cmd!("vitrina")
        .env("VITRINA_HOME", home.path())
        .args(["--script"])
        .arg(&show_path)
        .args(["play", "--quick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse show file"));
}
