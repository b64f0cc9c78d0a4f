//! Proportional redistribution of minor time into major entries.

use super::durations::TimedEntry;
use crate::errors::{AppError, AppResult};
use crate::models::summary::MajorEntry;

pub fn total_minutes(timed: &[TimedEntry]) -> i64 {
    timed
        .iter()
        .filter(|t| t.counts_total)
        .map(|t| t.raw_minutes)
        .sum()
}

pub fn major_minutes(timed: &[TimedEntry]) -> i64 {
    timed
        .iter()
        .filter(|t| t.counts_major)
        .map(|t| t.raw_minutes)
        .sum()
}

/// Ratio of total counted time to major-only time. Scaling every major
/// entry by this factor absorbs the minor time proportionally to the
/// existing major workload, not to temporal adjacency. Fails when there is
/// no major time to absorb into.
pub fn factor(timed: &[TimedEntry]) -> AppResult<f64> {
    let total = total_minutes(timed);
    let major = major_minutes(timed);
    if major == 0 {
        return Err(AppError::NoMajorTime {
            total_minutes: total,
        });
    }
    Ok(total as f64 / major as f64)
}

/// Scale every major entry by the stretch factor.
pub fn apply(timed: &[TimedEntry], factor: f64) -> Vec<MajorEntry> {
    timed
        .iter()
        .filter(|t| t.counts_major)
        .map(|t| {
            let minutes = t.raw_minutes as f64 * factor;
            MajorEntry {
                description: t.entry.description.clone(),
                original_minutes: t.raw_minutes,
                minutes,
                hours: minutes / 60.0,
                context: t.entry.context.clone(),
            }
        })
        .collect()
}
