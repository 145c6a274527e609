//! End-to-end tests for the `speiseplan` binary against a copy of the
//! shared fixtures under `tests/fixtures/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use speiseplan_core::{Weekday, WeeklyRecord};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/data")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap_or_else(|e| panic!("Failed to create {to:?}: {e}"));
    for entry in fs::read_dir(from).unwrap_or_else(|e| panic!("Failed to read {from:?}: {e}")) {
        let path = entry
            .unwrap_or_else(|e| panic!("Failed to read entry in {from:?}: {e}"))
            .path();
        let target = to.join(path.file_name().unwrap_or_else(|| panic!("no file name: {path:?}")));
        fs::copy(&path, &target).unwrap_or_else(|e| panic!("Failed to copy {path:?}: {e}"));
    }
}

/// Fresh data directory with the fixture catalog and history.
fn data_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "speiseplan_cli_{name}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    copy_dir(&fixture_root().join("options"), &dir.join("options"));
    copy_dir(&fixture_root().join("history"), &dir.join("history"));
    dir
}

fn speiseplan(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("speiseplan")
        .unwrap_or_else(|e| panic!("binary speiseplan not built: {e}"));
    cmd.arg("--data-dir").arg(dir);
    cmd
}

#[test]
fn suggest_yes_prints_menu_and_records_week() {
    let dir = data_dir("suggest_yes");

    speiseplan(&dir)
        .args(["suggest", "--yes", "--seed", "3", "--today", "2024-03-12"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Menu\n----\nsun: ")
                .and(predicate::str::contains("\nfri: "))
                .and(predicate::str::contains("Shopping List"))
                .and(predicate::str::contains("Record menu").not()),
        );

    let path = dir.join("history").join("2024-03-12.json");
    let body = fs::read_to_string(&path).unwrap_or_else(|e| panic!("record missing: {e}"));
    let record = WeeklyRecord::from_json("2024-03-12", &body).expect("recorded week parses");
    assert_eq!(record.items_on(Weekday::Sun).len(), 3);
    assert_eq!(record.items_on(Weekday::Mon).len(), 1);
    assert_eq!(record.items_on(Weekday::Wed).len(), 3);
}

#[test]
fn suggest_creates_history_directory_when_missing() {
    let dir = data_dir("fresh_history");
    fs::remove_dir_all(dir.join("history")).expect("drop fixture history");
    fs::write(dir.join("options").join("README.txt"), "catalog notes").expect("write notes");

    speiseplan(&dir)
        .args(["suggest", "--yes", "--seed", "11", "--today", "2024-03-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping List"));

    let path = dir.join("history").join("2024-03-12.json");
    let body = fs::read_to_string(&path).unwrap_or_else(|e| panic!("record missing: {e}"));
    let record = WeeklyRecord::from_json("2024-03-12", &body).expect("recorded week parses");
    for day in Weekday::ALL {
        assert!(!record.items_on(day).is_empty(), "{day} has no entree");
    }
}

#[test]
fn suggest_regenerates_until_accepted() {
    let dir = data_dir("suggest_retry");

    let output = speiseplan(&dir)
        .args(["suggest", "--dry-run", "--seed", "5", "--today", "2024-03-12"])
        .write_stdin("n\nnope\nYes\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert_eq!(stdout.matches("Menu\n----").count(), 3);
    assert_eq!(stdout.matches("Record menu for this week? ").count(), 3);
    assert_eq!(stdout.matches("Shopping List").count(), 1);
    assert!(!dir.join("history").join("2024-03-12.json").exists());
}

#[test]
fn suggest_fails_when_input_ends_without_answer() {
    let dir = data_dir("suggest_eof");

    speiseplan(&dir)
        .args(["suggest", "--seed", "1", "--today", "2024-03-12"])
        .write_stdin("no\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed before a menu was accepted"));
}

#[test]
fn suggest_reports_missing_candidates() {
    let dir = std::env::temp_dir().join(format!("speiseplan_cli_waffles_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("options")).expect("create options dir");
    fs::write(
        dir.join("options").join("waffles.json"),
        r#"{"tags": ["entree"]}"#,
    )
    .expect("write item");
    fs::write(dir.join("config.json"), r#"{"day_filters": {}}"#).expect("write config");

    speiseplan(&dir)
        .arg("--config")
        .arg(dir.join("config.json"))
        .args(["suggest", "--yes", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No eligible items for category entree on mon",
        ));
    assert!(!dir.join("history").exists());
}

#[test]
fn malformed_history_file_is_fatal() {
    let dir = data_dir("bad_history");
    fs::write(dir.join("history").join("last-week.json"), "{}").expect("write record");

    speiseplan(&dir)
        .args(["suggest", "--yes", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record date"));
}

#[test]
fn show_prints_latest_week_and_warns_about_unknown_items() {
    let dir = data_dir("show");

    speiseplan(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sun: lasagna, roasted-carrots, fruit-salad")
                .and(predicate::str::contains("sat:").not())
                .and(predicate::str::contains("rice (for curry and stir-fry)")),
        )
        .stderr(predicate::str::contains("meatloaf"));
}

#[test]
fn config_prints_effective_settings() {
    let dir = data_dir("config");
    fs::write(dir.join("config.json"), r#"{"min_repeat_days": 21}"#).expect("write config");

    speiseplan(&dir)
        .arg("--config")
        .arg(dir.join("config.json"))
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"min_repeat_days\": 21")
                .and(predicate::str::contains("\"+plain\"")),
        );
}

#[test]
fn invalid_config_is_rejected() {
    let dir = data_dir("bad_config");
    fs::write(dir.join("config.json"), r#"{"lambda_frac": 2.5}"#).expect("write config");

    speiseplan(&dir)
        .arg("--config")
        .arg(dir.join("config.json"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lambda_frac"));
}
