//! Report assembly: the timeline table, the two summary tables and the
//! total-hours line. Numbers keep full precision until rendered here.

use crate::models::entry::{self, Entry};
use crate::models::summary::DaySummary;
use crate::ui::messages;
use crate::utils::table::Table;

/// The full timeline as a table, with the index a later `--resume` would
/// address in the leading column.
pub fn timeline_table(entries: &[Entry]) -> String {
    let mut table = Table::new(vec![
        "index",
        "description",
        "start_time",
        "context",
        "is_finish",
        "is_minor",
    ]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            e.description.clone(),
            e.time_str(),
            e.context.clone(),
            entry::flag_str(e.is_finish).to_string(),
            entry::flag_str(e.is_minor).to_string(),
        ]);
    }

    table.render()
}

/// The summary report: major entries, per-context sums, total hours.
pub fn summary_report(summary: &DaySummary, styled: bool) -> String {
    let mut out = String::new();

    out.push_str(&messages::heading("Major Entries", styled));
    out.push('\n');
    out.push_str(&major_table(summary));
    out.push('\n');

    out.push_str(&messages::heading("Sums across contexts", styled));
    out.push('\n');
    out.push_str(&context_table(summary));
    out.push('\n');

    out.push_str(&format!("Total hours: {:.2}\n", summary.total_hours));
    out
}

fn major_table(summary: &DaySummary) -> String {
    let mut table = Table::new(vec![
        "description",
        "original_minutes",
        "minutes",
        "hours",
        "context",
    ]);

    for m in &summary.majors {
        table.add_row(vec![
            m.description.clone(),
            m.original_minutes.to_string(),
            format!("{:.2}", m.minutes),
            format!("{:.2}", m.hours),
            m.context.clone(),
        ]);
    }

    table.render()
}

fn context_table(summary: &DaySummary) -> String {
    let mut table = Table::new(vec![
        "context",
        "original_minutes",
        "minutes",
        "hours",
        "tasks",
    ]);

    for c in &summary.contexts {
        table.add_row(vec![
            c.context.clone(),
            c.original_minutes.to_string(),
            format!("{:.2}", c.minutes),
            format!("{:.2}", c.hours),
            c.tasks.join(", "),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use chrono::NaiveTime;

    fn entry(desc: &str, h: u32, m: u32, ctx: Option<&str>, is_finish: bool, is_minor: bool) -> Entry {
        Entry::new(
            desc.into(),
            NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            ctx.map(Into::into),
            is_finish,
            is_minor,
        )
    }

    #[test]
    fn timeline_table_shows_indices_and_flags() {
        let entries = vec![
            entry("email", 9, 0, Some("work"), false, false),
            entry("", 12, 0, None, true, false),
        ];

        let s = timeline_table(&entries);
        let lines: Vec<&str> = s.lines().collect();
        assert!(lines[0].starts_with("index"));
        assert!(lines[2].starts_with("0"));
        assert!(lines[2].contains("09:00"));
        assert!(lines[3].starts_with("1"));
        assert!(lines[3].contains("True"));
    }

    #[test]
    fn summary_report_rounds_to_two_decimals() {
        let entries = vec![
            entry("email", 9, 0, Some("work"), false, false),
            entry("lunch", 9, 30, None, false, true),
            entry("email", 10, 0, Some("work"), false, false),
            entry("", 12, 0, None, true, false),
        ];
        let summary = Core::build_day_summary(&entries, 12 * 60).unwrap();

        let s = summary_report(&summary, false);
        assert!(s.contains("Major Entries"));
        assert!(s.contains("36.00"));
        assert!(s.contains("144.00"));
        assert!(s.contains("Sums across contexts"));
        assert!(s.contains("180.00"));
        assert!(s.contains("Total hours: 3.00"));
    }

    #[test]
    fn empty_summary_renders_headers_only() {
        let s = summary_report(&DaySummary::default(), false);
        assert!(s.contains("Major Entries"));
        assert!(s.contains("Total hours: 0.00"));
    }
}
