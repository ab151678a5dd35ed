//! Terminal front end for tictacdollar.
//!
//! The engine crate is pure; this crate owns everything around it:
//! configuration, players, timing and text output.
//!
//! - [`config`]: TOML match configuration
//! - [`players`]: human and advisor players behind one trait
//! - [`session`]: the async loop that drives a match
//! - [`simulate`]: batches of unattended matches
//! - [`render`]: board and event text

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod players;
pub mod render;
pub mod session;
pub mod simulate;

pub use config::{ConfigError, Delays, MatchConfig, ModeKind};
pub use players::{AdvisorPlayer, Command, HumanPlayer, InputLines, Player, spawn_line_reader};
pub use session::{Session, SessionEvent, SessionSummary};
pub use simulate::{SimulationReport, simulate};
