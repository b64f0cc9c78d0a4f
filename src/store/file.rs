//! CSV persistence for day sheets: load, save, backup-before-overwrite.
//!
//! One file per day, header row plus one record per entry. Booleans are
//! stored as the literals `True`/`False` and parsed back by exact match.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::{ReaderBuilder, StringRecord, Writer};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{self, Entry};
use crate::ui::messages;
use crate::utils::time;

pub const FIELDS: [&str; 5] = ["description", "start_time", "context", "is_finish", "is_minor"];

/// Full path of the sheet for `filename` inside the configured data dir.
pub fn sheet_path(cfg: &Config, filename: &str) -> PathBuf {
    expand_tilde(&cfg.data_dir).join(format!("{filename}.csv"))
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Load a day's entries. A missing file is an empty day, not an error.
pub fn read_entries(path: &Path) -> AppResult<Vec<Entry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.records() {
        entries.push(parse_record(&record?)?);
    }
    Ok(entries)
}

fn parse_record(record: &StringRecord) -> AppResult<Entry> {
    let field = |i: usize| record.get(i).unwrap_or("").to_string();

    let raw_time = field(1);
    let start_time = time::parse_time(&raw_time).ok_or(AppError::InvalidTime(raw_time))?;

    Ok(Entry {
        description: field(0),
        start_time,
        context: field(2),
        is_finish: entry::parse_flag(record.get(3).unwrap_or("")),
        is_minor: entry::parse_flag(record.get(4).unwrap_or("")),
    })
}

/// Rewrite the whole sheet. The previous version, if any, is copied into
/// the backup directory first so repeated same-day writes cannot lose data.
pub fn write_entries(path: &Path, entries: &[Entry], verbose: bool) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    backup_existing(path, verbose)?;

    messages::trace(verbose, format!("Writing modified entries to {}", path.display()));
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(FIELDS)?;
    for e in entries {
        let start = e.time_str();
        wtr.write_record([
            e.description.as_str(),
            start.as_str(),
            e.context.as_str(),
            entry::flag_str(e.is_finish),
            entry::flag_str(e.is_minor),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

// Copy `<file>` to `backup/<file>.<HHMMSS>` next to it.
fn backup_existing(path: &Path, verbose: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let backup_dir = parent.join("backup");
    fs::create_dir_all(&backup_dir)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stamp = Local::now().format("%H%M%S");
    let backup_path = backup_dir.join(format!("{name}.{stamp}"));

    messages::trace(
        verbose,
        format!("Backing up {} as {}", path.display(), backup_path.display()),
    );
    fs::copy(path, &backup_path)?;
    Ok(())
}
