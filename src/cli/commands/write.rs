use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{Timesheet, file};
use crate::ui::{messages, report};
use crate::utils::time;

use super::{resolve_now, sheet_name};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Write {
        description,
        stop,
        time: time_arg,
        context,
        minor,
        resume,
    } = &cli.command
    {
        // A bare task needs a description; stop markers and resumed
        // entries bring their own.
        if description.is_none() && !*stop && resume.is_none() {
            return Err(AppError::MissingDescription);
        }

        let start = match time_arg {
            Some(s) => time::parse_time_str(s)?,
            None => resolve_now(cli)?,
        };
        messages::trace(cli.verbose, format!("Logging time {}", time::format_time(start)));

        let name = sheet_name(cli);
        let path = file::sheet_path(cfg, &name);
        messages::trace(cli.verbose, format!("Opening {}", path.display()));

        let mut sheet = Timesheet::new(file::read_entries(&path)?);
        messages::trace(
            cli.verbose,
            format!("Entries\n{}", report::timeline_table(sheet.entries())),
        );

        match resume {
            Some(index) => sheet.resume(*index, start)?,
            None => sheet.insert_new(
                description.clone().unwrap_or_default(),
                start,
                context.clone(),
                *stop,
                *minor,
            ),
        }

        println!("{}", messages::heading("New Entries", cfg.use_colors));
        println!("{}", report::timeline_table(sheet.entries()));

        file::write_entries(&path, sheet.entries(), cli.verbose)?;
    }
    Ok(())
}
