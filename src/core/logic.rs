use crate::core::calculator::{contexts, durations, stretch};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::summary::DaySummary;

pub struct Core;

impl Core {
    /// Build the per-day summary from a sorted timeline and the `now`
    /// anchor in minutes since midnight. An empty timeline yields an empty
    /// summary without invoking the redistributor.
    pub fn build_day_summary(entries: &[Entry], now_minutes: i64) -> AppResult<DaySummary> {
        if entries.is_empty() {
            return Ok(DaySummary::default());
        }

        let timed = durations::compute(entries, now_minutes);
        let factor = stretch::factor(&timed)?;
        let majors = stretch::apply(&timed, factor);
        let contexts = contexts::aggregate(&majors);
        let total_hours = majors.iter().map(|m| m.hours).sum();

        Ok(DaySummary {
            majors,
            contexts,
            total_hours,
        })
    }
}
