//! Player trait and implementations.

mod advisor;
mod human;

pub use advisor::AdvisorPlayer;
pub use human::{HumanPlayer, InputLines, spawn_line_reader};

use anyhow::Result;
use tictacdollar::{MatchState, Position};

/// What a player wants to happen next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a marker for the side to act.
    Play(Position),
    /// Abandon this match and start a new one with the same setup.
    Restart,
    /// Leave the session.
    Quit,
    /// Show the rules.
    Help,
    /// Input that could not be understood.
    Unrecognized(String),
}

impl Command {
    /// Parses one line of human input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "r" | "restart" => Command::Restart,
            "h" | "help" | "?" => Command::Help,
            _ => match Position::parse(trimmed) {
                Some(position) => Command::Play(position),
                None => Command::Unrecognized(trimmed.to_string()),
            },
        }
    }
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Decides what to do on `state`, where this player's side is to act.
    async fn choose(&mut self, state: &MatchState) -> Result<Command>;

    /// Whether this player is driven by keyboard input.
    fn is_human(&self) -> bool;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
