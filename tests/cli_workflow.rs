#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn libris_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("libris"));
    cmd.env("LIBRIS_CONFIG_DIR", temp.path().join("config"))
        .env_remove("LIBRIS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(path: &Path) {
    fs::write(
        path,
        r#"[
    {"id": 1, "title": "TEST_TITLE_01", "author": "TEST_AUTHOR_01", "year": "2000", "status": "available"},
    {"id": 3, "title": "TEST_TITLE_02", "author": "TEST_AUTHOR_02", "year": "2001", "status": "checked_out"}
]"#,
    )
    .unwrap();
}

#[test]
fn add_appends_with_next_id() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");
    seed(&data);

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["add", "T3", "A2", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'T3' added with id 4"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data).unwrap()).unwrap();
    let ids: Vec<u64> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(stored[2]["status"], "available");
}

#[test]
fn list_and_search_render_lines() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");
    seed(&data);

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(
            "1. TEST_TITLE_01 - TEST_AUTHOR_01 (2000) [available]\n\
             3. TEST_TITLE_02 - TEST_AUTHOR_02 (2001) [checked_out]\n",
        );

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["search", "2001"])
        .assert()
        .success()
        .stdout("3. TEST_TITLE_02 - TEST_AUTHOR_02 (2001) [checked_out]\n");

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["search", "200"])
        .assert()
        .success()
        .stdout("The library is empty\n");
}

#[test]
fn remove_unknown_id_fails_and_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");
    seed(&data);
    let before = fs::read(&data).unwrap();

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["remove", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book with id 999 not found"));

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["status", "999", "available"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book with id 999 not found"));

    assert_eq!(fs::read(&data).unwrap(), before);
}

#[test]
fn status_change_persists() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");
    seed(&data);

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["status", "1", "checked_out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Status of 'TEST_TITLE_01' changed to 'checked_out'",
        ));

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["status", "1", "lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.starts_with("[\n    {\n        \"id\": 1,"));
    let stored: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(stored[0]["status"], "checked_out");
}

#[test]
fn malformed_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");
    fs::write(&data, r#"[{"id": 1, "title": "no author"}]"#).unwrap();

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed library data"));
}

#[test]
fn data_file_from_environment_and_config() {
    let temp = TempDir::new().unwrap();
    let from_env = temp.path().join("env.json");
    let from_config = temp.path().join("configured.json");

    libris_cmd(&temp)
        .env("LIBRIS_FILE", &from_env)
        .args(["add", "Env Book", "A", "1999"])
        .assert()
        .success();
    assert!(from_env.exists());

    libris_cmd(&temp)
        .args(["config", "data-file"])
        .arg(&from_config)
        .assert()
        .success();

    libris_cmd(&temp)
        .args(["add", "Config Book", "A", "1998"])
        .assert()
        .success();
    assert!(fs::read_to_string(&from_config)
        .unwrap()
        .contains("Config Book"));
}

#[test]
fn non_ascii_is_written_literally() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .args(["add", "Мастер и Маргарита", "Булгаков", "1967"])
        .assert()
        .success();

    assert!(fs::read_to_string(&data)
        .unwrap()
        .contains("\"title\": \"Мастер и Маргарита\""));
}

#[test]
fn menu_session_over_stdin() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("library.json");

    libris_cmd(&temp)
        .arg("--file")
        .arg(&data)
        .write_stdin("1\nDune\nFrank Herbert\n1965\n\n5\n1\nchecked_out\n\n4\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'Dune' added with id 1"))
        .stdout(predicate::str::contains(
            "1. Dune - Frank Herbert (1965) [checked_out]",
        ));
}
