//! Time utilities: parsing HH:MM, minute conversions, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_str(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// The wall clock, truncated to minute precision.
pub fn now() -> NaiveTime {
    let t = Local::now().time();
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
