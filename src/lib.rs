//! daylog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Read => cli::commands::read::handle(cli, cfg),
        Commands::Write { .. } => cli::commands::write::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    messages::trace(cli.verbose, format!("Arguments: {:?}", cli));

    // load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
