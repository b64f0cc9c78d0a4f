use chrono::{NaiveTime, Timelike};

/// One row of a day's timeline: a task-start event.
///
/// The sheet format has no stable ids; an entry is addressed positionally
/// inside the sorted timeline (see `store::Timesheet::resume`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub description: String,
    pub start_time: NaiveTime, // minute precision, "HH:MM" on disk
    pub context: String,
    pub is_finish: bool,
    pub is_minor: bool,
}

impl Entry {
    /// High-level constructor for entries created from the CLI.
    /// An empty or missing context falls back to the description.
    pub fn new(
        description: String,
        start_time: NaiveTime,
        context: Option<String>,
        is_finish: bool,
        is_minor: bool,
    ) -> Self {
        let context = context
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| description.clone());
        Self {
            description,
            start_time,
            context,
            is_finish,
            is_minor,
        }
    }

    pub fn time_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn start_minutes(&self) -> i64 {
        i64::from(self.start_time.hour()) * 60 + i64::from(self.start_time.minute())
    }

    /// A major entry is neither minor nor a finish marker; its time is
    /// reported individually. Both flags are checked independently.
    pub fn is_major(&self) -> bool {
        !self.is_finish && !self.is_minor
    }
}

/// Literal used for boolean flags in the sheet format.
pub fn flag_str(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

/// Exact-match parse of a stored flag literal; any other text is `false`.
pub fn parse_flag(s: &str) -> bool {
    s == "True"
}
