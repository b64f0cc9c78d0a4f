//! Derived summary models for one day.

/// A major entry with its stretch-adjusted time.
#[derive(Debug, Clone)]
pub struct MajorEntry {
    pub description: String,
    pub original_minutes: i64,
    pub minutes: f64,
    pub hours: f64,
    pub context: String,
}

/// Per-context sums over the major entries.
#[derive(Debug, Clone)]
pub struct ContextSummary {
    pub context: String,
    pub original_minutes: i64,
    pub minutes: f64,
    pub hours: f64,
    /// Distinct task descriptions, first-seen order.
    pub tasks: Vec<String>,
}

#[derive(Debug, Default)]
pub struct DaySummary {
    pub majors: Vec<MajorEntry>,
    pub contexts: Vec<ContextSummary>,
    pub total_hours: f64,
}
