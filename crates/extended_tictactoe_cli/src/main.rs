//! Extended tic-tac-toe - terminal front end

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use extended_tictactoe::{GameConfig, GameSettings};
use extended_tictactoe_cli::{BoardArgs, Cli, Command, Controller, load_settings};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(&args),
        Command::Check(args) => run_check(&args),
    }
}

/// Merges defaults, the settings file and flags, then validates.
#[instrument]
fn resolve_config(args: &BoardArgs) -> Result<GameConfig> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => GameSettings::default(),
    };
    let settings = args.apply(settings);
    let config = settings
        .validate()
        .context("Invalid game settings")?;
    Ok(config)
}

/// Play games on stdin/stdout until quit or end of input.
fn run_play(args: &BoardArgs) -> Result<()> {
    let config = resolve_config(args)?;
    info!("Starting terminal game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcomes = Controller::new(config, stdin.lock(), stdout.lock()).run()?;

    info!(games = outcomes.len(), "Goodbye");
    Ok(())
}

/// Print the configuration a `play` with the same flags would use.
fn run_check(args: &BoardArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let dimensions = config.dimensions();
    let markers: String = config.markers().iter().map(|m| m.symbol()).collect();

    let mut out = io::stdout().lock();
    writeln!(out, "rows       = {}", dimensions.rows())?;
    writeln!(out, "columns    = {}", dimensions.columns())?;
    writeln!(out, "win_length = {}", dimensions.win_length())?;
    writeln!(out, "players    = {}", config.markers().len())?;
    writeln!(out, "markers    = {markers:?}")?;
    writeln!(out, "board      = {:?}", config.board_kind().to_string())?;
    Ok(())
}
