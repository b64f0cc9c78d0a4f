#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlg() -> Command {
    cargo_bin_cmd!("daylog")
}

/// Create a unique sheet directory inside the system temp dir and remove any existing copy
pub fn setup_sheet_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylog", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Log the worked example used by several tests:
/// email 09:00 (work), lunch 09:30 (minor), email 10:00 (work), stop 12:00
pub fn seed_example_day(dir: &str, sheet: &str) {
    dlg()
        .args([
            "--data-dir", dir, "-f", sheet, "write", "email", "-t", "09:00", "-c", "work",
        ])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", dir, "-f", sheet, "write", "lunch", "-t", "09:30", "-m"])
        .assert()
        .success();

    dlg()
        .args([
            "--data-dir", dir, "-f", sheet, "write", "email", "-t", "10:00", "-c", "work",
        ])
        .assert()
        .success();

    dlg()
        .args(["--data-dir", dir, "-f", sheet, "write", "-s", "-t", "12:00"])
        .assert()
        .success();
}
