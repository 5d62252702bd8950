//! Grid coordinates.
//!
//! Positions are `(row, col)` pairs on the 5×5 board, row 0 at the top.
//! Stepping off the board yields `None` rather than a wrapped or clamped
//! coordinate.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 5;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if the coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE, "position off board");
        Self { row, col }
    }

    /// Create a position if the coordinate lies on the board.
    #[must_use]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// Row-major index into a flat cell array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    /// The neighbouring position in `direction`, or `None` off the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Self::try_new(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Centre value: 2 on the middle cell, 1 on the ring around it, 0 on the edge.
    #[must_use]
    pub fn center_value(self) -> u8 {
        let centre = Position::new(2, 2);
        match self.distance(centre) {
            0 => 2,
            1 => 1,
            _ => 0,
        }
    }

    /// Iterate over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
