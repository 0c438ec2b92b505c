//! Mastermind - CLI
//!
//! Terminal Mastermind with a full-screen TUI and a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::run_simple,
    config::Config,
    core::ProblemSize,
    game::{Controller, PlayerCount, Settings},
    interactive::run_tui,
    logging::init_tracing,
};
use std::path::PathBuf;
use tracing::info;

const MAX_ATTEMPTS: i64 = mastermind::config::MAX_ATTEMPTS as i64;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden color code in as few guesses as you can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/mastermind/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pegs per code: 4, 6 or 8
    #[arg(short, long, global = true, value_parser = parse_size)]
    size: Option<ProblemSize>,

    /// Players: 1 (random code) or 2 (second player sets the code)
    #[arg(short, long, global = true, value_parser = parse_players)]
    players: Option<PlayerCount>,

    /// Guesses per round
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=MAX_ATTEMPTS))]
    attempts: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type guesses as color symbols
    Simple,
}

fn parse_size(value: &str) -> Result<ProblemSize, String> {
    value
        .parse::<usize>()
        .ok()
        .and_then(ProblemSize::from_pegs)
        .ok_or_else(|| format!("'{value}' is not 4, 6 or 8"))
}

fn parse_players(value: &str) -> Result<PlayerCount, String> {
    value
        .parse::<u8>()
        .ok()
        .and_then(PlayerCount::from_count)
        .ok_or_else(|| format!("'{value}' is not 1 or 2"))
}

/// Settings from the config file with command-line overrides applied
fn settings(cli: &Cli, config: &Config) -> Result<Settings> {
    let mut settings = config.game.settings()?;
    if let Some(size) = cli.size {
        settings.size = size;
    }
    if let Some(players) = cli.players {
        settings.players = players;
    }
    if let Some(attempts) = cli.attempts {
        settings.attempts = attempts;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(config.log_file.as_deref());

    let settings = settings(&cli, &config)?;
    info!(
        pegs = settings.size.pegs(),
        players = settings.players.count(),
        attempts = settings.attempts,
        "starting"
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(Controller::new(settings, rand::rng())),
        Commands::Simple => run_simple(settings, rand::rng()),
    }
}
