//! CLI integration tests: exercise the sqlseed binary end to end with
//! real .xlsx fixtures authored via rust_xlsxwriter.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

/// Write a small bilingual roster workbook: two rows sharing section 41,
/// one with an apostrophe in the participants and a multi-file column.
fn write_roster(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["분반", "작품명", "조원", "담당교수", "파일"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    worksheet.write_number(1, 0, 41.0).unwrap();
    worksheet.write_string(1, 1, "Demo").unwrap();
    worksheet.write_string(1, 2, "O'Brien, Lee").unwrap();
    worksheet.write_string(1, 3, "Kim").unwrap();
    worksheet.write_string(1, 4, "a.mp4/b.jpg").unwrap();

    worksheet.write_number(2, 0, 41.0).unwrap();
    worksheet.write_string(2, 1, "Second").unwrap();

    workbook.save(path).unwrap();
}

/// Roster missing both required columns.
fn write_headerless_roster(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "조원").unwrap();
    worksheet.write_string(1, 0, "A, B").unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlseed"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlseed"));
}

#[test]
fn test_generate_help() {
    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat-max"))
        .stdout(predicate::str::contains("dry-run"));
}

#[test]
fn test_generate_writes_sql_document() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("roster.xlsx");
    let out = dir.path().join("seed.sql");
    write_roster(&roster);

    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args([
        "generate",
        roster.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--year",
        "20251",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("SQL written to"));

    let document = std::fs::read_to_string(&out).unwrap();
    assert!(document.starts_with("-- AUTO-GENERATED "));
    assert!(document.contains("SET NAMES utf8mb4;"));
    assert!(document.contains("INSERT INTO `category` (`id`, `name`) VALUES\n  (1, '41');"));
    assert!(document.contains("(1, 1, 'exhibition'"));
    assert!(document.contains(r"'O\'Brien, Lee'"));
    assert!(document.contains("'/uploads/videos/20251/a.mp4'"));
    assert!(document.contains("'/uploads/videos/20251/b.jpg'"));
    assert!(document.ends_with("SET FOREIGN_KEY_CHECKS = 1;\n"));
}

#[test]
fn test_generate_respects_baseline_ids() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("roster.xlsx");
    let out = dir.path().join("seed.sql");
    write_roster(&roster);

    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args([
        "generate",
        roster.to_str().unwrap(),
        "--cat-max",
        "10",
        "--post-max",
        "100",
        "--exh-max",
        "5",
        "--file-max",
        "7",
        "-o",
        out.to_str().unwrap(),
    ])
    .assert()
    .success();

    let document = std::fs::read_to_string(&out).unwrap();
    assert!(document.contains("INSERT INTO `category` (`id`, `name`) VALUES\n  (11, '41');"));
    assert!(document.contains("\n  (101, 11, 'exhibition'"));
    assert!(document.contains("\n  (6, 101, 'Demo'"));
    assert!(document.contains("\n  (8, 101, 'a.mp4'"));
}

#[test]
fn test_dry_run_prints_document_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("roster.xlsx");
    let out = dir.path().join("seed.sql");
    write_roster(&roster);

    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args([
        "generate",
        roster.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("SET FOREIGN_KEY_CHECKS = 0;"))
    .stdout(predicate::str::contains("INSERT INTO `exhibition`"));

    assert!(!out.exists());
}

#[test]
fn test_missing_required_columns_abort_without_output() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("roster.xlsx");
    let out = dir.path().join("seed.sql");
    write_headerless_roster(&roster);

    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args([
        "generate",
        roster.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("category_name"))
    .stderr(predicate::str::contains("post_title"));

    assert!(!out.exists());
}

#[test]
fn test_unreadable_workbook_fails() {
    let mut cmd = Command::cargo_bin("sqlseed").unwrap();
    cmd.args(["generate", "no-such-roster.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-roster.xlsx"));
}
