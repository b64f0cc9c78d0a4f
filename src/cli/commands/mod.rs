pub mod read;
pub mod write;

use chrono::NaiveTime;

use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::utils::{date, time};

/// The wall-clock anchor, honoring the hidden `--now` override.
pub(crate) fn resolve_now(cli: &Cli) -> AppResult<NaiveTime> {
    match &cli.now {
        Some(s) => time::parse_time_str(s),
        None => Ok(time::now()),
    }
}

/// The sheet name for this invocation (defaults to today).
pub(crate) fn sheet_name(cli: &Cli) -> String {
    cli.filename.clone().unwrap_or_else(date::today_str)
}
