//! Tic-tac-toe console
//!
//! Terminal presentation layer over the board engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{BoardEngine, ConsoleConfig, run_console, write_state};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => {
            let json = json || *config.json();
            run_replay(&moves, config.with_json(json))
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(config: &ConsoleConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game
#[instrument(skip(config))]
fn run_play(config: &ConsoleConfig) -> Result<()> {
    info!("Starting console game");
    let mut engine = BoardEngine::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_console(&mut engine, stdin.lock(), &mut stdout, config)?;
    info!("Console closed");
    Ok(())
}

/// Replay moves and print the final state
#[instrument(skip(config))]
fn run_replay(moves: &[usize], config: ConsoleConfig) -> Result<()> {
    let engine = BoardEngine::replay(moves);
    info!(status = ?engine.status(), "Replay finished");
    write_state(&engine, &mut std::io::stdout(), &config)?;
    Ok(())
}
