//! Turn representation: which worker, where it moves, where it builds.
//!
//! A turn is the complete decision a strategy hands back to the session.
//! The session applies the move first and the build second, from the
//! worker's new position.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::side::Side;
use super::worker::WorkerLabel;

/// A complete turn decision.
///
/// ```
/// use santorini::core::{Direction, Turn, WorkerLabel};
///
/// let turn = Turn::new(WorkerLabel::A, Direction::N, Direction::E);
/// assert_eq!(turn.to_string(), "A,n,e");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The worker to move.
    pub worker: WorkerLabel,

    /// Direction of the move.
    pub move_dir: Direction,

    /// Direction of the build, relative to the worker's new position.
    pub build_dir: Direction,
}

impl Turn {
    #[must_use]
    pub const fn new(worker: WorkerLabel, move_dir: Direction, build_dir: Direction) -> Self {
        Self {
            worker,
            move_dir,
            build_dir,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.worker, self.move_dir, self.build_dir)
    }
}

/// A turn as it was played, for the session's history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The side that played the turn.
    pub side: Side,

    /// Turn number when it was played.
    pub number: u32,

    /// The turn itself.
    pub turn: Turn,
}

impl TurnRecord {
    #[must_use]
    pub fn new(side: Side, number: u32, turn: Turn) -> Self {
        Self { side, number, turn }
    }
}
