//! Workers and the worker arena.
//!
//! ## WorkerLabel
//!
//! Stable identity of a worker: `A`, `B` (white) or `Y`, `Z` (blue). Cells
//! record occupancy by label, so a label is the handle everything else uses
//! to refer to a worker. Labels survive snapshot restoration unchanged.
//!
//! ## WorkerArena
//!
//! Owns the four `Worker` values for a game. The board never owns workers;
//! it reads and updates them through the arena.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::RulesError;
use super::position::Position;
use super::side::Side;

/// Identity label of one of the four workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerLabel {
    A,
    B,
    Y,
    Z,
}

impl WorkerLabel {
    /// All labels, white's first.
    pub const ALL: [WorkerLabel; 4] =
        [WorkerLabel::A, WorkerLabel::B, WorkerLabel::Y, WorkerLabel::Z];

    /// The side controlling this worker.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            WorkerLabel::A | WorkerLabel::B => Side::White,
            WorkerLabel::Y | WorkerLabel::Z => Side::Blue,
        }
    }

    /// Fixed starting coordinate.
    #[must_use]
    pub const fn start(self) -> Position {
        match self {
            WorkerLabel::A => Position::new(3, 1),
            WorkerLabel::B => Position::new(1, 3),
            WorkerLabel::Y => Position::new(1, 1),
            WorkerLabel::Z => Position::new(3, 3),
        }
    }

    /// The boundary character for this worker.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            WorkerLabel::A => 'A',
            WorkerLabel::B => 'B',
            WorkerLabel::Y => 'Y',
            WorkerLabel::Z => 'Z',
        }
    }

    const fn index(self) -> usize {
        match self {
            WorkerLabel::A => 0,
            WorkerLabel::B => 1,
            WorkerLabel::Y => 2,
            WorkerLabel::Z => 3,
        }
    }
}

impl FromStr for WorkerLabel {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkerLabel::ALL
            .iter()
            .copied()
            .find(|l| s.len() == 1 && s.starts_with(l.as_char()))
            .ok_or_else(|| RulesError::UnknownWorker(s.to_string()))
    }
}

impl std::fmt::Display for WorkerLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A movable piece.
///
/// `height` mirrors the height of the cell at `position` as of the worker's
/// last move. Builds never land on an occupied cell, so it stays accurate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub label: WorkerLabel,
    pub position: Position,
    pub height: u8,
}

impl Worker {
    /// Create a worker at its starting coordinate on flat ground.
    #[must_use]
    pub fn new(label: WorkerLabel) -> Self {
        Self {
            label,
            position: label.start(),
            height: 0,
        }
    }

    /// Record a completed move.
    pub fn relocate(&mut self, position: Position, height: u8) {
        self.position = position;
        self.height = height;
    }

    /// Side controlling this worker.
    #[must_use]
    pub fn side(&self) -> Side {
        self.label.side()
    }
}

/// The four workers of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerArena {
    workers: [Worker; 4],
}

impl Default for WorkerArena {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerArena {
    /// All four workers at their starting coordinates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: WorkerLabel::ALL.map(Worker::new),
        }
    }

    /// Linear scan for the worker carrying `label`.
    #[must_use]
    pub fn lookup(&self, label: WorkerLabel) -> Option<&Worker> {
        self.workers.iter().find(|w| w.label == label)
    }

    /// Iterate over all workers.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// The two workers of `side`.
    pub fn of_side(&self, side: Side) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.side() == side)
    }

    /// Resolve a boundary token to one of `side`'s workers.
    ///
    /// Fails with `UnknownWorker` for anything but the four labels and with
    /// `NotYourWorker` for a label of the other side.
    pub fn select(&self, side: Side, token: &str) -> Result<WorkerLabel, RulesError> {
        let label: WorkerLabel = token.parse()?;
        if label.side() != side {
            return Err(RulesError::NotYourWorker(label));
        }
        Ok(label)
    }
}

impl Index<WorkerLabel> for WorkerArena {
    type Output = Worker;

    fn index(&self, label: WorkerLabel) -> &Self::Output {
        &self.workers[label.index()]
    }
}

impl IndexMut<WorkerLabel> for WorkerArena {
    fn index_mut(&mut self, label: WorkerLabel) -> &mut Self::Output {
        &mut self.workers[label.index()]
    }
}
