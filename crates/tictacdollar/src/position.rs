//! Validated board coordinates.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the 5x5 board.
///
/// Always in bounds: the only ways to build one are the checked
/// constructors, so the engine never has to reject an off-board move.
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Coordinates that fall outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("({}, {}) is off the {}x{} board", _0, _1, BOARD_SIZE, BOARD_SIZE)]
pub struct OutOfBounds(pub usize, pub usize);

impl std::error::Error for OutOfBounds {}

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position { row: 2, col: 2 };

    /// The four corner cells, row-major.
    pub const CORNERS: [Position; 4] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 4 },
        Position { row: 4, col: 0 },
        Position { row: 4, col: 4 },
    ];

    /// Creates a position, or `None` if it is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Creates a position from a row-major index (0-24).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Row-major index (0-24).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Self::from_index)
    }

    /// Steps `(dr, dc)` away from this position, if that stays on the board.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Center or corner.
    pub fn is_preferred(self) -> bool {
        self == Self::CENTER || Self::CORNERS.contains(&self)
    }

    /// Parses `"r,c"`, `"r c"` or a row-major index.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [index] => Self::from_index(index.parse().ok()?),
            [row, col] => Self::new(row.parse().ok()?, col.parse().ok()?),
            _ => None,
        }
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = OutOfBounds;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(OutOfBounds(row, col))
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
