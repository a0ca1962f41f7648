//! streamflow library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (epoch conversion, row cursors, printer).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod telemetry;
pub mod ui;

use clap::Parser;

use crate::cli::commands::Context;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::epoch::parse_timestamp;
use crate::db::target::DbTarget;
use crate::errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Dump) => crate::cli::commands::dump::handle(ctx),
        Some(cmd @ Commands::Epoch { .. }) => crate::cli::commands::epoch::handle(cmd),
        Some(cmd @ Commands::Config { .. }) => crate::cli::commands::config::handle(cmd, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    telemetry::init_tracing()?;

    // config file first, then command-line overrides on top
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    if let Some(since) = &cli.since {
        cfg.since = parse_timestamp(since)?.date();
    }

    let target = match &cli.db {
        Some(db) => DbTarget::parse(db)?,
        None => cfg.target(),
    };

    let ctx = Context {
        cfg,
        config_path,
        target,
    };

    dispatch(&cli, &ctx)
}
