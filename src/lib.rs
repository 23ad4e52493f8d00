//! rPunchclock library root.
//! Exposes the time-accounting engine (`core`, `models`, `db`) and the CLI
//! front end built on top of it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::level_filters::LevelFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::punch::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg),
        Commands::Weeks => cli::commands::weeks::handle(cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::enable_logging(LevelFilter::WARN);

    let cli = Cli::parse();

    // In test mode the user's config file is never read.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
