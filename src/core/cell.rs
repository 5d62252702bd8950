//! A single board cell.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::worker::WorkerLabel;

/// Height at which a cell is capped: no more building, no entering.
pub const CAPPED_HEIGHT: u8 = 4;

/// One grid location.
///
/// The occupant is a label handle into the worker arena; the cell never owns
/// the worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    height: u8,
    occupant: Option<WorkerLabel>,
}

impl Cell {
    /// Create an empty, flat cell.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            height: 0,
            occupant: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[must_use]
    pub fn occupant(&self) -> Option<WorkerLabel> {
        self.occupant
    }

    /// Whether a worker standing at `from_height` may step onto this cell.
    #[must_use]
    pub fn can_enter(&self, from_height: u8) -> bool {
        self.height < from_height + 2 && self.can_build()
    }

    /// Whether this cell accepts another level.
    #[must_use]
    pub fn can_build(&self) -> bool {
        self.height < CAPPED_HEIGHT && self.occupant.is_none()
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<WorkerLabel>) {
        self.occupant = occupant;
    }

    pub(crate) fn raise(&mut self) {
        debug_assert!(self.height < CAPPED_HEIGHT);
        self.height += 1;
    }

    pub(crate) fn set_height(&mut self, height: u8) {
        self.height = height;
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupant {
            Some(label) => write!(f, "|{}{}", self.height, label),
            None => write!(f, "|{} ", self.height),
        }
    }
}
