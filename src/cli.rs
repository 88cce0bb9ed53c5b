//! Command-line interface for the console front-end.

use clap::{Parser, Subcommand};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to console configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a sequence of moves and print the final state
    Replay {
        /// Board indices (0-8) in play order
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
