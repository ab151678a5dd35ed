//! Core domain types for tictacdollar.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Edge length of the square board.
pub const BOARD_SIZE: usize = 5;

/// One of the two competing sides in a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    /// The first contestant slot.
    First,
    /// The second contestant slot.
    Second,
}

impl Side {
    /// Both sides, in slot order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A pair of values, one per [`Side`].
///
/// Indexed by the side tag rather than by named fields, so the
/// contents of each slot (names, markers, purses) stay generic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides<T> {
    slots: [T; 2],
}

impl<T> Sides<T> {
    /// Creates a pair from the first and second slot values.
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [first, second],
        }
    }

    /// Iterates over `(side, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.slots.iter())
    }

    /// Builds a new pair by applying `f` to each slot.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Sides<U> {
        let [first, second] = &self.slots;
        Sides::new(f(first), f(second))
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.slots[side.slot()]
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.slots[side.slot()]
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here since the last clear.
    #[default]
    Empty,
    /// Holds the marker of the given side.
    Occupied(Side),
}

/// 5x5 board of cells, addressed by zero-based `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `side` placed at `pos`.
    pub fn with(&self, pos: Position, side: Side) -> Self {
        let mut board = self.clone();
        board.set(pos, Cell::Occupied(side));
        board
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Side::First) => '1',
                    Cell::Occupied(Side::Second) => '2',
                };
                write!(f, "{symbol}")?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
