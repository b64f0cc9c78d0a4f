use clap::{Parser, Subcommand};

/// Command-line interface definition for daylog
/// CLI tool to keep per-day logs of what you worked on for how long
#[derive(Parser, Debug)]
#[command(
    name = "daylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log what you started working on and when, and summarize the day per task and context",
    long_about = None
)]
pub struct Cli {
    /// The day file to read/write as YYYY-MM-DD (defaults to today)
    #[arg(global = true, short = 'f', long = "filename")]
    pub filename: Option<String>,

    /// Print diagnostic traces while running
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Override the sheet directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Override the current time (HH:MM) used to close the last task
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the time sheet for the day and summarize it
    Read,

    /// Add an entry to the time sheet for the day
    Write {
        /// Informal description of the task
        description: Option<String>,

        /// Flag the entry as an endpoint, its time will not be counted
        #[arg(short, long)]
        stop: bool,

        /// The time of the added line as HH:MM, defaults to now
        #[arg(short, long)]
        time: Option<String>,

        /// User-defined context used to group tasks, defaults to the description
        #[arg(short, long)]
        context: Option<String>,

        /// Mark the task as minor, its duration is spread across the other tasks
        #[arg(short, long)]
        minor: bool,

        /// Resume the n-th task: 0 resumes the first task, 1 the second.
        /// A negative value starts from the back, -1 resumes the current
        /// task. The time field is not taken from the resumed task.
        #[arg(short, long, allow_negative_numbers = true)]
        resume: Option<i64>,
    },
}
