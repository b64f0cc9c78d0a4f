//! Raw duration inference from consecutive start times.

use crate::models::entry::Entry;

/// A timeline entry with its inferred duration and counting classification.
#[derive(Debug, Clone)]
pub struct TimedEntry {
    pub entry: Entry,
    pub raw_minutes: i64,
    /// Counts toward total time (false only for finish markers).
    pub counts_total: bool,
    /// Counts toward major time (neither finish nor minor).
    pub counts_major: bool,
}

/// Infer per-entry durations from a sorted timeline and a `now` anchor in
/// minutes since midnight. Each entry runs until the next one starts; the
/// anchor closes the last entry. The anchor is clamped to the last logged
/// start, so an entry logged with a future explicit time can never produce
/// a negative duration.
pub fn compute(entries: &[Entry], now_minutes: i64) -> Vec<TimedEntry> {
    let mut boundaries: Vec<i64> = entries.iter().map(Entry::start_minutes).collect();
    let end = boundaries
        .last()
        .map_or(now_minutes, |last| now_minutes.max(*last));
    boundaries.push(end);

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| TimedEntry {
            entry: e.clone(),
            raw_minutes: boundaries[i + 1] - boundaries[i],
            counts_total: !e.is_finish,
            counts_major: e.is_major(),
        })
        .collect()
}
