//! Connection detection anchored at the newest marker.

use super::super::{Board, Cell, Position, Side};
use tracing::instrument;

/// Shortest run that scores.
pub const MIN_RUN: usize = 3;

/// Cells examined in each direction away from the anchor.
const REACH: usize = 2;

/// Horizontal, vertical, falling diagonal, rising diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Finds a run of at least [`MIN_RUN`] cells of `side` through `anchor`.
///
/// Each axis is walked outward from the anchor in both directions,
/// stopping at the first cell that is off the board or not `side`'s,
/// and never more than two cells per direction. The anchor counts as
/// `side`'s whatever the board holds there, so the advisor can test
/// empty cells. The first qualifying axis wins and its positions are
/// returned in row-major order.
#[instrument(skip(board))]
pub fn find_connection(board: &Board, anchor: Position, side: Side) -> Option<Vec<Position>> {
    AXES.iter().find_map(|&(dr, dc)| {
        let mut run = vec![anchor];
        for sign in [-1, 1] {
            let mut cursor = anchor;
            for _ in 0..REACH {
                match cursor.offset(dr * sign, dc * sign) {
                    Some(next) if board.get(next) == Cell::Occupied(side) => {
                        run.push(next);
                        cursor = next;
                    }
                    _ => break,
                }
            }
        }
        (run.len() >= MIN_RUN).then(|| {
            run.sort();
            run
        })
    })
}
