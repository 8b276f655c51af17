//! End-to-end CLI tests driving the compiled binary against a temporary
//! data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_record() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Food", "20", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Food - $20 on 2024-01-01"));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01,Food,20"));
}

#[test]
fn list_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn stats_over_two_records() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Food", "20", "--date", "2024-01-01"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["add", "Transport", "15", "--date", "2024-01-02"])
        .assert()
        .success();

    spendlog(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Expenses: $35.00 | Average: $17.50 (2 entries)",
        ));
}

#[test]
fn stats_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Expenses: $0.00 | Average: $0.00 (0 entries)",
        ));
}

#[test]
fn filter_is_case_insensitive() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Food", "20", "--date", "2024-01-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["filter", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01,Food,20"));
}

#[test]
fn remove_round_trip() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Food", "20", "--date", "2024-01-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["remove", "2024-01-01", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry"));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01,Food,20").not());
}

#[test]
fn remove_without_ledger_reports_nothing_to_do() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["remove", "2024-01-01", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"));
}

#[test]
fn categories_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories used yet."));
}

#[test]
fn categories_are_lowercased_and_deduped() {
    let dir = TempDir::new().unwrap();

    for args in [
        ["add", "Food", "20"],
        ["add", "FOOD", "5"],
        ["add", "Transport", "15"],
    ] {
        spendlog(&dir).args(args).assert().success();
    }

    spendlog(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("food")
                .and(predicate::str::contains("transport"))
                .and(predicate::str::contains("FOOD").not()),
        );
}

#[test]
fn config_reports_default_settings() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Settings (defaults):")
                .and(predicate::str::contains("Currency symbol: $")),
        );
}

#[test]
fn config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"currency_symbol":"€"}"#,
    )
    .unwrap();

    spendlog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Settings (from config.json):")
                .and(predicate::str::contains("Currency symbol: €")),
        );
}

#[test]
fn rejects_negative_amount() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Food", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}
