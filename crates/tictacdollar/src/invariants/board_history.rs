//! Board/history invariant: the board is exactly the moves since the last clear.

use super::super::{Board, Cell, MatchState};
use super::Invariant;

/// Invariant: replaying history since the last clear rebuilds the board.
///
/// Every replayed move must land on an empty cell, so markers are never
/// overwritten, and the result must equal the current board.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<MatchState> for BoardMatchesHistoryInvariant {
    fn holds(state: &MatchState) -> bool {
        if state.cleared_at > state.history.len() {
            return false;
        }

        let mut rebuilt = Board::new();
        for mov in state.moves_on_board() {
            if !rebuilt.is_empty(mov.position) {
                return false;
            }
            rebuilt.set(mov.position, Cell::Occupied(mov.side));
        }

        rebuilt == state.board
    }

    fn description() -> &'static str {
        "Board equals the moves placed since the last clear"
    }
}
