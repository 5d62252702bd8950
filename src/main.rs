//! Play Santorini in the terminal.
//!
//! Usage: santorini [white] [blue] [undo_redo] [score] [--seed N]

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use santorini::{GameConfig, IoConsole, PlayerKind, Session, Side};

/// Play Santorini between humans, random and heuristic players
#[derive(Parser, Debug)]
#[command(name = "santorini")]
#[command(about = "Two-player Santorini on a 5x5 board", long_about = None)]
struct Args {
    /// White player: human, random or heuristic
    #[arg(default_value_t = PlayerKind::Human)]
    white: PlayerKind,

    /// Blue player: human, random or heuristic
    #[arg(default_value_t = PlayerKind::Human)]
    blue: PlayerKind,

    /// Offer undo/redo before each turn (on/off)
    #[arg(default_value = "off", value_parser = parse_switch, action = ArgAction::Set)]
    undo_redo: bool,

    /// Show the active side's score with the turn banner (on/off)
    #[arg(default_value = "off", value_parser = parse_switch, action = ArgAction::Set)]
    score: bool,

    /// Seed for the automated players
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("expected on or off, got {:?}", other)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = GameConfig::default()
        .with_player(Side::White, args.white)
        .with_player(Side::Blue, args.blue)
        .with_undo_redo(args.undo_redo)
        .with_score(args.score);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(config, IoConsole::stdio());
    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
