//! Aggregation of adjusted major entries per context.

use crate::models::summary::{ContextSummary, MajorEntry};

/// Group major entries by context, summing original and adjusted time and
/// collecting the distinct task descriptions. Contexts and descriptions
/// keep first-seen order so the report is deterministic.
pub fn aggregate(majors: &[MajorEntry]) -> Vec<ContextSummary> {
    let mut sums: Vec<ContextSummary> = Vec::new();

    for entry in majors {
        match sums.iter_mut().find(|c| c.context == entry.context) {
            Some(ctx) => {
                ctx.original_minutes += entry.original_minutes;
                ctx.minutes += entry.minutes;
                ctx.hours += entry.hours;
                if !ctx.tasks.contains(&entry.description) {
                    ctx.tasks.push(entry.description.clone());
                }
            }
            None => sums.push(ContextSummary {
                context: entry.context.clone(),
                original_minutes: entry.original_minutes,
                minutes: entry.minutes,
                hours: entry.hours,
                tasks: vec![entry.description.clone()],
            }),
        }
    }

    sums
}
