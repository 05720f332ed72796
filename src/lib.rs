//! rTicketline library root.
//! Exposes the timeline engine (core), its data model, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Render { .. } => {
            cli::commands::render::handle(&cli.command, cfg, cli.tz.as_deref())
        }
        Commands::Categories { .. } => cli::commands::categories::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::load_from(&cfg_path)?;

    if let Some(tz) = &cli.tz {
        cfg.display_timezone = tz.clone();
        cfg.validate()?;
    }

    dispatch(&cli, &cfg, &cfg_path)
}
