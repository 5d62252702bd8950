//! The 5×5 board: legality evaluation, move/build application, scoring.
//!
//! ## Legality
//!
//! - A **build** target must be on the board, below height 4 and unoccupied.
//! - A **move** target must additionally be at most one level above the
//!   source, and the worker must still have a build available once it stands
//!   there (with the cell it left now empty). A move that would strand the
//!   worker with nothing to build is rejected.
//!
//! ## Ownership
//!
//! The board owns its cells. Workers live in a [`WorkerArena`]; the board
//! records occupancy by [`WorkerLabel`] and takes the worker being moved as a
//! `&mut Worker` so it can update the cached position and height.
//!
//! ## Rendering
//!
//! `Display` produces the fixed text grid:
//!
//! ```text
//! +--+--+--+--+--+
//! |0 |0 |0 |0 |0 |
//! ...
//! +--+--+--+--+--+
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::debug;

use super::cell::{Cell, CAPPED_HEIGHT};
use super::direction::{Direction, Directions};
use super::error::RulesError;
use super::position::{Position, BOARD_SIZE};
use super::worker::{Worker, WorkerArena, WorkerLabel};

const ROW_SEPARATOR: &str = "+--+--+--+--+--+";

/// Base of the distance score.
const MAX_DISTANCE_SCORE: i32 = 8;

/// The game board.
///
/// Cells are stored row-major in a persistent vector so hypothetical boards
/// can be cloned cheaply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Cell>,
}

impl Board {
    /// Create a flat board with every worker of `workers` placed on its cell.
    #[must_use]
    pub fn new(workers: &WorkerArena) -> Self {
        let mut cells: Vector<Cell> = Position::all().map(Cell::new).collect();
        for worker in workers.iter() {
            cells[worker.position.index()].set_occupant(Some(worker.label));
        }
        Self { cells }
    }

    /// Get the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.index()]
    }

    /// Height at `position`.
    #[must_use]
    pub fn height(&self, position: Position) -> u8 {
        self.cell(position).height()
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // === Legality ===

    /// Directions a worker standing at `position` may build in.
    #[must_use]
    pub fn possible_builds(&self, position: Position) -> Directions {
        self.builds_from(position, None)
    }

    /// Directions a worker standing at `position` may move in.
    ///
    /// Each candidate also needs at least one build from its destination.
    #[must_use]
    pub fn possible_moves(&self, position: Position) -> Directions {
        let from_height = self.height(position);

        Direction::ALL
            .iter()
            .copied()
            .filter(|&direction| {
                position
                    .step(direction)
                    .map(|target| {
                        self.cell(target).can_enter(from_height)
                            && !self.builds_from(target, Some(position)).is_empty()
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Builds available after moving from `position` in `direction`.
    ///
    /// Evaluated on the hypothetical board where the source cell is vacated.
    /// Returns an empty set if the destination is off the board.
    #[must_use]
    pub fn builds_after_move(&self, position: Position, direction: Direction) -> Directions {
        match position.step(direction) {
            Some(target) => self.builds_from(target, Some(position)),
            None => smallvec![],
        }
    }

    fn builds_from(&self, position: Position, vacated: Option<Position>) -> Directions {
        Direction::ALL
            .iter()
            .copied()
            .filter(|&direction| match position.step(direction) {
                Some(target) if Some(target) == vacated => self.height(target) < CAPPED_HEIGHT,
                Some(target) => self.cell(target).can_build(),
                None => false,
            })
            .collect()
    }

    // === Mutation ===

    /// Move `worker` in the direction named by `token`.
    ///
    /// Fails with `InvalidDirection` for an unknown token and `IllegalMove`
    /// when the direction is not currently legal.
    pub fn move_worker(
        &mut self,
        token: &str,
        worker: &mut Worker,
    ) -> Result<Direction, RulesError> {
        let direction = Direction::parse_token(token)?;
        self.move_in(direction, worker)?;
        Ok(direction)
    }

    /// Move `worker` one step in `direction`.
    pub fn move_in(&mut self, direction: Direction, worker: &mut Worker) -> Result<(), RulesError> {
        let source = worker.position;
        if !self.possible_moves(source).contains(&direction) {
            debug!(worker = %worker.label, %direction, %source, "rejected move");
            return Err(RulesError::IllegalMove(direction));
        }

        let target = source.step(direction).ok_or(RulesError::IllegalMove(direction))?;

        self.cells[source.index()].set_occupant(None);
        let cell = &mut self.cells[target.index()];
        cell.set_occupant(Some(worker.label));
        worker.relocate(target, cell.height());

        Ok(())
    }

    /// Build next to `worker` in the direction named by `token`.
    ///
    /// Same validation as [`Board::move_worker`].
    pub fn build(&mut self, token: &str, worker: &Worker) -> Result<Direction, RulesError> {
        let direction = Direction::parse_token(token)?;
        self.build_in(direction, worker)?;
        Ok(direction)
    }

    /// Raise the cell next to `worker` in `direction` by one level.
    pub fn build_in(&mut self, direction: Direction, worker: &Worker) -> Result<(), RulesError> {
        let source = worker.position;
        if !self.possible_builds(source).contains(&direction) {
            debug!(worker = %worker.label, %direction, %source, "rejected build");
            return Err(RulesError::IllegalMove(direction));
        }

        let target = source.step(direction).ok_or(RulesError::IllegalMove(direction))?;
        self.cells[target.index()].raise();

        Ok(())
    }

    // === Scoring ===

    /// Sum of the heights under two positions.
    #[must_use]
    pub fn height_score(&self, first: Position, second: Position) -> i32 {
        i32::from(self.height(first)) + i32::from(self.height(second))
    }

    /// Sum of the centre values of two positions.
    #[must_use]
    pub fn center_score(&self, first: Position, second: Position) -> i32 {
        i32::from(first.center_value()) + i32::from(second.center_value())
    }

    /// `8` minus, for each friendly position, the distance to the nearest
    /// opponent.
    #[must_use]
    pub fn distance_score(&self, friendly: [Position; 2], opponents: &[Position]) -> i32 {
        let total: i32 = friendly
            .iter()
            .map(|&own| {
                opponents
                    .iter()
                    .map(|&opponent| i32::from(own.distance(opponent)))
                    .min()
                    .unwrap_or(0)
            })
            .sum();
        MAX_DISTANCE_SCORE - total
    }

    /// Weighted evaluation of a pair of friendly positions: `3·height +
    /// 2·center + distance`.
    #[must_use]
    pub fn move_score(&self, friendly: [Position; 2], opponents: &[Position]) -> i32 {
        let [first, second] = friendly;
        3 * self.height_score(first, second)
            + 2 * self.center_score(first, second)
            + self.distance_score(friendly, opponents)
    }

    /// Positions of every occupant whose label is not in `excluding`.
    #[must_use]
    pub fn other_workers_positions(&self, excluding: &[WorkerLabel]) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.occupant().is_some_and(|label| !excluding.contains(&label)))
            .map(Cell::position)
            .collect()
    }

    /// Linear scan for the cell occupied by `label`.
    #[must_use]
    pub fn locate(&self, label: WorkerLabel) -> Option<Position> {
        self.cells
            .iter()
            .find(|cell| cell.occupant() == Some(label))
            .map(Cell::position)
    }

    pub(crate) fn set_height(&mut self, position: Position, height: u8) {
        self.cells[position.index()].set_height(height);
    }

    pub(crate) fn set_occupant(&mut self, position: Position, occupant: Option<WorkerLabel>) {
        self.cells[position.index()].set_occupant(occupant);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            writeln!(f, "{}", ROW_SEPARATOR)?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col])?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", ROW_SEPARATOR)
    }
}
