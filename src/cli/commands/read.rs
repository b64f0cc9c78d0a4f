use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::store::{Timesheet, file};
use crate::ui::{messages, report};
use crate::utils::time;

use super::{resolve_now, sheet_name};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let name = sheet_name(cli);
    let path = file::sheet_path(cfg, &name);
    messages::trace(cli.verbose, format!("Opening {}", path.display()));

    let sheet = Timesheet::new(file::read_entries(&path)?);
    if sheet.is_empty() {
        println!("No entries for {}.", name);
        return Ok(());
    }

    println!("{}", report::timeline_table(sheet.entries()));

    let now = resolve_now(cli)?;
    let summary = Core::build_day_summary(sheet.entries(), time::minutes_since_midnight(now))?;
    print!("{}", report::summary_report(&summary, cfg.use_colors));
    Ok(())
}
