//! Board-full detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board is cleared and play continues; it never ends a match.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Side};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let mut board = Board::new();
        for pos in Position::all().skip(1) {
            board.set(pos, Cell::Occupied(Side::First));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, pos) in Position::all().enumerate() {
            let side = if i % 2 == 0 { Side::First } else { Side::Second };
            board.set(pos, Cell::Occupied(side));
        }
        assert!(is_full(&board));
    }
}
