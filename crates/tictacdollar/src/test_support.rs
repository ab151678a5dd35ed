//! Shared fixtures for unit tests.

use crate::{ContestantSetup, Difficulty, GameMode, MatchSetup, MatchState, Position, Side, Tuning};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Move order that fills the board without any run of three.
///
/// First's cells at even indices, Second's at odd, First's last cell at
/// the end. The finished board reads `FFSSF / SSFFS / FFSSF / SSFFS / FFSSF`.
pub const NO_RUN_ORDER: [(usize, usize); 25] = [
    (0, 0), (0, 2), (0, 1), (0, 3), (0, 4), (1, 0), (1, 2), (1, 1), (1, 3), (1, 4), (2, 0), (2, 2),
    (2, 1), (2, 3), (2, 4), (3, 0), (3, 2), (3, 1), (3, 3), (3, 4), (4, 0), (4, 2), (4, 1), (4, 3),
    (4, 4),
];

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("test position in bounds")
}

/// Human-vs-human match at `difficulty` with `first` to move.
pub fn match_at(first: Side, difficulty: Difficulty) -> MatchState {
    let setup = MatchSetup::new(
        ContestantSetup::new("Dog", "D"),
        ContestantSetup::new("Cat", "C"),
        difficulty,
        GameMode::HumanVsHuman,
    );
    let mut state = MatchState::new(setup, Tuning::standard(), &mut StdRng::seed_from_u64(0));
    state.to_move = first;
    state
}

/// Medium-difficulty match with `first` to move.
pub fn fresh_match(first: Side) -> MatchState {
    match_at(first, Difficulty::Medium)
}
