//! First-class move and rejection types.
//!
//! A move is a domain event: a side placing its marker at a position.
//! Moves are recorded in match history and validated by contracts
//! before they touch the board.

use super::{Position, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A side placing its marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the marker goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position)
    }
}

/// Why a move was not applied.
///
/// Rejection is not a failure of the engine: the state is left exactly
/// as it was. The reason is reported so a front end can explain it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The match has already ended.
    #[display("Match is already over")]
    MatchOver,

    /// The target cell holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The mover has no balance left.
    #[display("Side {} has no balance left", _0)]
    Bankrupt(Side),

    /// The move was submitted for the side not currently acting.
    #[display("It's not side {}'s turn", _0)]
    WrongTurn(Side),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RejectReason {}
