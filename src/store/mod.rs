//! In-memory event store for one day's timeline.
//!
//! The `Timesheet` exclusively owns the entry list for the lifetime of one
//! invocation and keeps it sorted by start time at all times.

pub mod file;

use chrono::NaiveTime;

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

#[derive(Debug, Default)]
pub struct Timesheet {
    entries: Vec<Entry>,
}

impl Timesheet {
    /// Wrap loaded entries, restoring the sort invariant.
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut sheet = Self { entries };
        sheet.sort();
        sheet
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert_new(
        &mut self,
        description: String,
        start_time: NaiveTime,
        context: Option<String>,
        is_finish: bool,
        is_minor: bool,
    ) {
        self.entries
            .push(Entry::new(description, start_time, context, is_finish, is_minor));
        self.sort();
    }

    /// Clone the entry at a signed position in the current sorted order,
    /// give the copy a fresh start time and re-insert it. 0 addresses the
    /// earliest entry, -1 the most recent. The resolved position is valid
    /// only at call time; the copy has no link back to its source.
    pub fn resume(&mut self, index: i64, start_time: NaiveTime) -> AppResult<()> {
        let count = self.entries.len();
        let resolved = if index < 0 { index + count as i64 } else { index };
        if resolved < 0 || resolved >= count as i64 {
            return Err(AppError::ResumeOutOfRange { index, count });
        }

        let mut copy = self.entries[resolved as usize].clone();
        copy.start_time = start_time;
        self.entries.push(copy);
        self.sort();
        Ok(())
    }

    // Stable sort: equal start times keep their insertion order.
    fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.start_time);
    }
}
