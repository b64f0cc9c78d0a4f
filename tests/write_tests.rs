use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{dlg, setup_sheet_dir};

#[test]
fn test_write_creates_sheet_and_prints_timeline() {
    let dir = setup_sheet_dir("write_creates_sheet");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "email", "-t", "09:00"])
        .assert()
        .success()
        .stdout(contains("New Entries").and(contains("email")).and(contains("09:00")));

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    assert!(content.starts_with("description,start_time,context,is_finish,is_minor"));
    assert!(content.contains("email,09:00,email,False,False"));
}

#[test]
fn test_write_requires_description() {
    let dir = setup_sheet_dir("write_requires_description");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write"])
        .assert()
        .failure()
        .stderr(contains("The description must not be omitted"));

    // nothing was persisted
    assert!(!Path::new(&dir).join("sheet.csv").exists());
}

#[test]
fn test_write_stop_needs_no_description() {
    let dir = setup_sheet_dir("write_stop_no_description");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "-s", "-t", "17:00"])
        .assert()
        .success()
        .stdout(contains("True"));

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    assert!(content.contains(",17:00,,True,False"));
}

#[test]
fn test_write_rejects_malformed_time() {
    let dir = setup_sheet_dir("write_bad_time");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "email", "-t", "nine"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: nine"));
}

#[test]
fn test_out_of_order_write_is_resorted() {
    let dir = setup_sheet_dir("out_of_order_write");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "late", "-t", "10:00"])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "early", "-t", "09:00"])
        .assert()
        .success();

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    let early_pos = content.find("early,09:00").unwrap();
    let late_pos = content.find("late,10:00").unwrap();
    assert!(early_pos < late_pos);
}

#[test]
fn test_resume_clones_the_addressed_entry() {
    let dir = setup_sheet_dir("resume_clones");

    dlg()
        .args([
            "--data-dir", &dir, "-f", "sheet", "write", "email", "-t", "09:00", "-c", "work",
        ])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "lunch", "-t", "12:00", "-m"])
        .assert()
        .success();

    // resume the first task without repeating its description or context
    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "-r", "0", "-t", "13:00"])
        .assert()
        .success();

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    assert!(content.contains("email,09:00,work,False,False"));
    assert!(content.contains("email,13:00,work,False,False"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_resume_negative_index_addresses_from_the_back() {
    let dir = setup_sheet_dir("resume_negative");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "first", "-t", "09:00"])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "second", "-t", "10:00"])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "-r", "-1", "-t", "11:00"])
        .assert()
        .success();

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    assert!(content.contains("second,11:00"));
}

#[test]
fn test_resume_out_of_range_fails_and_persists_nothing() {
    let dir = setup_sheet_dir("resume_out_of_range");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "email", "-t", "09:00"])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "-r", "5", "-t", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Attempted to resume task 5, but there are only 1 entries"));

    let content = fs::read_to_string(Path::new(&dir).join("sheet.csv")).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_overwrite_creates_backup_copy() {
    let dir = setup_sheet_dir("write_backup");

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "a", "-t", "09:00"])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", &dir, "-f", "sheet", "write", "b", "-t", "10:00"])
        .assert()
        .success();

    let backups: Vec<_> = fs::read_dir(Path::new(&dir).join("backup"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("sheet.csv."));
}

#[test]
fn test_verbose_write_traces_progress() {
    let dir = setup_sheet_dir("write_verbose");

    dlg()
        .args([
            "--data-dir", &dir, "-f", "sheet", "-v", "write", "email", "-t", "09:00",
        ])
        .assert()
        .success()
        .stdout(
            contains("Logging time 09:00")
                .and(contains("Opening"))
                .and(contains("Writing modified entries to")),
        );
}
