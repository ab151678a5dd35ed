//! Tictacdollar: pure game logic for a 5x5 connect-three game with money.
//!
//! Two sides take turns placing markers. Every move costs the mover one
//! unit of balance; completing a straight run of three or more of their
//! own markers pays a reward and earns a star. A side that runs out of
//! money loses, and a board that fills up is simply cleared.
//!
//! # Architecture
//!
//! - **Engine**: [`MatchState`] and its transitions (`new`, `apply_move`,
//!   `resolve_tie`, `clear_highlight`, `restart`)
//! - **Rules**: connection, board-full and outcome evaluation as pure functions
//! - **Contracts**: move preconditions and invariant postconditions
//! - **Advisor**: the rule-based opponent, [`advise_move`]
//!
//! The crate does no I/O and holds no global state. Randomness is
//! always passed in, so a seeded generator replays a match exactly.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictacdollar::{
//!     ContestantSetup, Difficulty, GameMode, MatchSetup, MatchState, Position, Tuning,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let setup = MatchSetup::new(
//!     ContestantSetup::new("A", "x"),
//!     ContestantSetup::new("B", "o"),
//!     Difficulty::Medium,
//!     GameMode::HumanVsHuman,
//! );
//! let state = MatchState::new(setup, Tuning::standard(), &mut rng);
//! let mover = state.to_move();
//! let state = state.apply_move(Position::CENTER);
//! assert_eq!(state.contestant(mover).purse().balance(), 14);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod advisor;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod state;
mod tuning;
mod types;

#[cfg(test)]
mod test_support;

// Crate-level exports - Board types
pub use position::{OutOfBounds, Position};
pub use types::{BOARD_SIZE, Board, Cell, Side, Sides};

// Crate-level exports - Match state
pub use state::{Contestant, ContestantSetup, GameMode, MatchSetup, MatchState, Outcome, Purse};
pub use tuning::{Difficulty, Tuning, TuningPreset};

// Crate-level exports - Transitions
pub use action::{Move, RejectReason};
pub use engine::{MatchEvent, MoveReport};

// Crate-level exports - Rules
pub use rules::{MIN_RUN, evaluate, find_connection, is_full};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    CellIsEmpty, Contract, LegalMove, MatchLive, MoveContract, MoverSolvent, SideToAct,
};
pub use invariants::{
    AlternatingTurnInvariant, BoardMatchesHistoryInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, PurseLedgerInvariant,
};

// Crate-level exports - Advisor
pub use advisor::{Advice, Rationale, advise, advise_move};
