//! rTimetable library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Load { .. } => cli::commands::load::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Applies the global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(schedule) = &cli.schedule {
        cfg.schedule_file = schedule.clone();
    }
    if let Some(years) = &cli.years {
        cfg.default_years = years.clone();
    }
    if cli.no_color {
        cfg.use_colors = false;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
