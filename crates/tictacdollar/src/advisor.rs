//! Rule-based move selection for computer-controlled sides.
//!
//! A fixed priority list, one ply deep: take a scoring cell, else deny
//! the opponent theirs, else prefer the center and corners, else any
//! open cell. Ties inside a tier are broken with the injected generator.

use super::rules::find_connection;
use super::{Board, Position, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which priority tier produced the suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Rationale {
    /// The cell completes a connection for the acting side.
    Win,
    /// The cell would complete a connection for the opponent.
    Block,
    /// Center or corner.
    Preferred,
    /// Anything open.
    Random,
}

/// A suggested move and why it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Advice {
    /// Where to play.
    pub position: Position,
    /// The tier that chose it.
    pub rationale: Rationale,
}

/// Suggests a move for `side` on `board`.
///
/// Returns `None` only when the board has no empty cell. The board is
/// never modified.
#[instrument(skip(board, rng))]
pub fn advise<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Advice> {
    let open = board.empty_positions();
    if open.is_empty() {
        debug!("No open cells to advise on");
        return None;
    }

    let advice = if let Some(position) = completing_cell(board, &open, side) {
        Advice {
            position,
            rationale: Rationale::Win,
        }
    } else if let Some(position) = completing_cell(board, &open, side.opponent()) {
        Advice {
            position,
            rationale: Rationale::Block,
        }
    } else {
        let preferred: Vec<Position> = open.iter().copied().filter(|p| p.is_preferred()).collect();
        match preferred.choose(rng) {
            Some(&position) => Advice {
                position,
                rationale: Rationale::Preferred,
            },
            None => Advice {
                position: *open.choose(rng)?,
                rationale: Rationale::Random,
            },
        }
    };

    debug!(position = %advice.position, rationale = %advice.rationale, "Advisor chose move");
    Some(advice)
}

/// Suggests only the position; see [`advise`].
pub fn advise_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Position> {
    advise(board, side, rng).map(|advice| advice.position)
}

/// First open cell, row-major, where `side` would complete a connection.
fn completing_cell(board: &Board, open: &[Position], side: Side) -> Option<Position> {
    open.iter()
        .copied()
        .find(|&pos| find_connection(&board.with(pos, side), pos, side).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::test_support::pos;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(rows: [&str; 5]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '1' => Cell::Occupied(Side::First),
                    '2' => Cell::Occupied(Side::Second),
                    _ => Cell::Empty,
                };
                board.set(pos(r, c), cell);
            }
        }
        board
    }

    #[test]
    fn test_takes_the_win() {
        let board = board_from(["11...", ".....", "..2..", ".2...", "....."]);
        let mut rng = StdRng::seed_from_u64(0);
        let advice = advise(&board, Side::First, &mut rng).unwrap();
        assert_eq!(advice.position, pos(0, 2));
        assert_eq!(advice.rationale, Rationale::Win);
    }

    #[test]
    fn test_win_beats_block() {
        // Second could finish the column at (2,4), but First wins first.
        let board = board_from([".11.2", "....2", ".....", ".....", "....."]);
        let mut rng = StdRng::seed_from_u64(0);
        let advice = advise(&board, Side::First, &mut rng).unwrap();
        assert_eq!(advice.rationale, Rationale::Win);
        assert_eq!(advice.position, pos(0, 0));
    }

    #[test]
    fn test_blocks_opponent() {
        let board = board_from(["2....", "2....", ".....", "...1.", "....."]);
        let mut rng = StdRng::seed_from_u64(0);
        let advice = advise(&board, Side::First, &mut rng).unwrap();
        assert_eq!(advice.position, pos(2, 0));
        assert_eq!(advice.rationale, Rationale::Block);
    }

    #[test]
    fn test_prefers_center_and_corners() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let advice = advise(&Board::new(), Side::Second, &mut rng).unwrap();
            assert_eq!(advice.rationale, Rationale::Preferred);
            assert!(advice.position.is_preferred());
        }
    }

    #[test]
    fn test_falls_back_to_any_open_cell() {
        // Center and corners taken, no pair close enough to finish or block.
        let board = board_from(["2...2", ".....", "..1..", ".....", "2...2"]);
        let mut rng = StdRng::seed_from_u64(9);
        let advice = advise(&board, Side::First, &mut rng).unwrap();
        assert_eq!(advice.rationale, Rationale::Random);
        assert!(board.is_empty(advice.position));
    }

    #[test]
    fn test_full_board_has_no_advice() {
        let board = board_from(["11221", "22112", "11221", "22112", "11221"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(advise_move(&board, Side::First, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_advice() {
        let board = board_from([".....", ".1...", ".....", "...2.", "....."]);
        let a = advise_move(&board, Side::Second, &mut StdRng::seed_from_u64(5));
        let b = advise_move(&board, Side::Second, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
