//! Errors raised by the rules engine and by state validation.
//!
//! All of these are recoverable at whatever boundary produced the input:
//! the engine reports them and never retries on its own.

use thiserror::Error;

use super::direction::Direction;
use super::position::Position;
use super::worker::WorkerLabel;

/// A rejected move, build, or worker selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Token is not one of the eight compass abbreviations.
    #[error("not a valid direction: {0:?}")]
    InvalidDirection(String),

    /// Direction is well formed but not currently legal.
    ///
    /// Used for both moves and builds.
    #[error("illegal direction: {0}")]
    IllegalMove(Direction),

    /// Token is not one of the four worker labels.
    #[error("not a valid worker: {0:?}")]
    UnknownWorker(String),

    /// Label is valid but belongs to the other side.
    #[error("worker {0} belongs to the other side")]
    NotYourWorker(WorkerLabel),
}

/// A layout or restored state that breaks the occupancy invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("height {height} at {position} is above the cap")]
    HeightAboveCap { position: Position, height: u8 },

    #[error("{0} is occupied twice")]
    SharedCell(Position),

    #[error("worker {label} placed on capped cell {position}")]
    OnCappedCell { label: WorkerLabel, position: Position },

    #[error("worker {0} occupies more than one cell")]
    Duplicated(WorkerLabel),

    #[error("worker {label} is at {cached} but its cell is {cell}")]
    Misplaced {
        label: WorkerLabel,
        cached: Position,
        cell: Position,
    },

    #[error("worker {label} caches height {cached} on a level {actual} cell")]
    HeightMismatch {
        label: WorkerLabel,
        cached: u8,
        actual: u8,
    },

    #[error("worker {0} is not on the board")]
    Missing(WorkerLabel),
}
