//! Terminal presentation layer.
//!
//! Reads one command per line, forwards moves and restarts to the engine
//! and prints the board after every command.

use super::action::MoveOutcome;
use super::config::ConsoleConfig;
use super::{BoardEngine, Position};
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play the current player's mark.
    Play(Position),
    /// Start a new game.
    Reset,
    /// Leave the console.
    Quit,
}

/// Input that is neither a cell nor a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}': enter a cell 1-9, a position name, r to restart or q to quit", input)]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl ConsoleCommand {
    /// Parses a cell number (1-9), a position label, `r`/`reset` or `q`/`quit`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let trimmed = line.trim();
        let command = match trimmed.to_lowercase().as_str() {
            "r" | "reset" | "restart" => Some(ConsoleCommand::Reset),
            "q" | "quit" | "exit" => Some(ConsoleCommand::Quit),
            other => match other.parse::<usize>() {
                Ok(n) => n.checked_sub(1).and_then(Position::from_index).map(ConsoleCommand::Play),
                Err(_) => Position::from_label(other).map(ConsoleCommand::Play),
            },
        };
        command.ok_or_else(|| ParseCommandError {
            input: trimmed.to_string(),
        })
    }
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(
    engine: &mut BoardEngine,
    input: R,
    output: &mut W,
    config: &ConsoleConfig,
) -> io::Result<()> {
    write_state(engine, output, config)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match ConsoleCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Reset => engine.reset(),
            ConsoleCommand::Play(pos) => {
                if let MoveOutcome::Ignored(reason) = engine.play(pos) {
                    writeln!(output, "Ignored: {}", reason)?;
                    continue;
                }
            }
        }

        write_state(engine, output, config)?;
        if !engine.is_active() {
            writeln!(output, "Enter r to play again or q to quit.")?;
        }
    }

    output.flush()
}

/// Prints the board and status line, or a JSON snapshot.
pub fn write_state<W: Write>(
    engine: &BoardEngine,
    output: &mut W,
    config: &ConsoleConfig,
) -> io::Result<()> {
    let snapshot = engine.snapshot();
    if *config.json() {
        writeln!(output, "{}", serde_json::to_string(&snapshot)?)
    } else {
        writeln!(
            output,
            "{}\n{}",
            engine.board().render(*config.show_cell_numbers()),
            snapshot.message
        )
    }
}
