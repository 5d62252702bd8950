//! Game state: the board plus the worker arena.
//!
//! `GameState` is the unit the snapshot history captures and restores. It
//! excludes the turn counter and active side; those belong to
//! the session.
//!
//! ## Consistency
//!
//! A well-formed state satisfies:
//! - every worker's cell records that worker as occupant;
//! - no other cell is occupied;
//! - every worker's cached height matches its cell.
//!
//! [`GameState::validate`] checks these before a restored state goes live.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::Turn;
use super::board::Board;
use super::cell::CAPPED_HEIGHT;
use super::direction::Directions;
use super::error::{RulesError, StateError};
use super::position::{Position, BOARD_SIZE};
use super::side::Side;
use super::worker::{Worker, WorkerArena, WorkerLabel};

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub workers: WorkerArena,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: flat board, workers on their starting cells.
    #[must_use]
    pub fn new() -> Self {
        let workers = WorkerArena::new();
        let board = Board::new(&workers);
        Self { board, workers }
    }

    /// Build an arbitrary position from a height grid and worker placements.
    ///
    /// Used for puzzles and tests. Fails if a height exceeds 4, two workers
    /// share a cell, or a worker stands on a capped cell.
    pub fn with_layout(
        heights: [[u8; BOARD_SIZE]; BOARD_SIZE],
        placements: [(WorkerLabel, Position); 4],
    ) -> Result<Self, StateError> {
        let mut state = Self::new();
        for label in WorkerLabel::ALL {
            let start = state.workers[label].position;
            state.board.set_occupant(start, None);
        }

        for position in Position::all() {
            let height = heights[position.row as usize][position.col as usize];
            if height > CAPPED_HEIGHT {
                return Err(StateError::HeightAboveCap { position, height });
            }
            state.board.set_height(position, height);
        }

        for (label, position) in placements {
            if state.board.cell(position).occupant().is_some() {
                return Err(StateError::SharedCell(position));
            }
            let height = state.board.height(position);
            if height >= CAPPED_HEIGHT {
                return Err(StateError::OnCappedCell { label, position });
            }
            state.board.set_occupant(position, Some(label));
            state.workers[label].relocate(position, height);
        }

        state.validate()?;
        Ok(state)
    }

    /// Get a worker by label.
    #[must_use]
    pub fn worker(&self, label: WorkerLabel) -> &Worker {
        &self.workers[label]
    }

    /// Legal moves for the worker carrying `label`.
    #[must_use]
    pub fn moves_for(&self, label: WorkerLabel) -> Directions {
        self.board.possible_moves(self.workers[label].position)
    }

    /// Whether `side` has at least one legal move with either worker.
    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        side.labels().iter().any(|&label| !self.moves_for(label).is_empty())
    }

    /// Apply a full turn: move, then build from the new position.
    ///
    /// Applied to a copy and swapped in on success, so a rejected build
    /// leaves the state as it was.
    pub fn apply_turn(&mut self, turn: Turn) -> Result<(), RulesError> {
        let mut next = self.clone();
        let worker = &mut next.workers[turn.worker];
        next.board.move_in(turn.move_dir, worker)?;
        next.board.build_in(turn.build_dir, &next.workers[turn.worker])?;
        *self = next;
        Ok(())
    }

    /// Re-resolve a worker by label against the board.
    ///
    /// Returns the worker only if the board places it where the arena does.
    #[must_use]
    pub fn resolve(&self, label: WorkerLabel) -> Option<&Worker> {
        let worker = self.workers.lookup(label)?;
        (self.board.locate(label) == Some(worker.position)).then_some(worker)
    }

    /// Check the occupancy invariants.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut seen = FxHashSet::default();

        for cell in self.board.cells() {
            let Some(label) = cell.occupant() else {
                continue;
            };
            if !seen.insert(label) {
                return Err(StateError::Duplicated(label));
            }
            let worker = &self.workers[label];
            if worker.position != cell.position() {
                return Err(StateError::Misplaced {
                    label,
                    cached: worker.position,
                    cell: cell.position(),
                });
            }
            if worker.height != cell.height() {
                return Err(StateError::HeightMismatch {
                    label,
                    cached: worker.height,
                    actual: cell.height(),
                });
            }
        }

        if let Some(&missing) = WorkerLabel::ALL.iter().find(|l| !seen.contains(*l)) {
            return Err(StateError::Missing(missing));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_new_state_is_valid() {
        let state = GameState::new();
        assert_eq!(state.validate(), Ok(()));
        assert!(state.has_moves(Side::White));
        assert!(state.has_moves(Side::Blue));
    }

    #[test]
    fn test_apply_turn() {
        let mut state = GameState::new();
        state
            .apply_turn(Turn::new(WorkerLabel::A, Direction::N, Direction::E))
            .unwrap();

        assert_eq!(state.worker(WorkerLabel::A).position, Position::new(2, 1));
        assert_eq!(state.board.height(Position::new(2, 2)), 1);
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn test_apply_turn_builds_from_new_position() {
        let mut state = GameState::new();
        state
            .apply_turn(Turn::new(WorkerLabel::A, Direction::N, Direction::W))
            .unwrap();
        assert_eq!(state.board.height(Position::new(2, 0)), 1);
        assert_eq!(state.board.height(Position::new(3, 0)), 0);
    }

    #[test]
    fn test_rejected_build_leaves_state_untouched() {
        let mut state = GameState::new();
        let before = state.clone();

        // After A moves to (2,1), north is Y's cell
        let result = state.apply_turn(Turn::new(WorkerLabel::A, Direction::N, Direction::N));
        assert_eq!(result, Err(RulesError::IllegalMove(Direction::N)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut state = GameState::new();
        state.board.set_height(Position::new(2, 2), 2);
        let before = state.clone();

        let result = state.apply_turn(Turn::new(WorkerLabel::A, Direction::NE, Direction::N));
        assert_eq!(result, Err(RulesError::IllegalMove(Direction::NE)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_resolve() {
        let state = GameState::new();
        for label in WorkerLabel::ALL {
            assert_eq!(state.resolve(label).map(|w| w.label), Some(label));
        }
    }

    #[test]
    fn test_validate_detects_drift() {
        let mut state = GameState::new();
        state.workers[WorkerLabel::Z].relocate(Position::new(0, 0), 0);
        assert_eq!(
            state.validate(),
            Err(StateError::Misplaced {
                label: WorkerLabel::Z,
                cached: Position::new(0, 0),
                cell: Position::new(3, 3),
            })
        );
        assert!(state.resolve(WorkerLabel::Z).is_none());

        let mut state = GameState::new();
        state.board.set_occupant(Position::new(3, 3), None);
        assert_eq!(state.validate(), Err(StateError::Missing(WorkerLabel::Z)));
    }

    #[test]
    fn test_with_layout() {
        let mut heights = [[0u8; 5]; 5];
        heights[0][0] = 3;
        let state = GameState::with_layout(
            heights,
            [
                (WorkerLabel::A, Position::new(0, 0)),
                (WorkerLabel::B, Position::new(4, 4)),
                (WorkerLabel::Y, Position::new(2, 2)),
                (WorkerLabel::Z, Position::new(0, 4)),
            ],
        )
        .unwrap();

        assert_eq!(state.worker(WorkerLabel::A).height, 3);
        assert_eq!(state.board.locate(WorkerLabel::Y), Some(Position::new(2, 2)));
        assert_eq!(state.board.cell(Position::new(3, 1)).occupant(), None);
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn test_with_layout_rejects_bad_input() {
        let placements = [
            (WorkerLabel::A, Position::new(0, 0)),
            (WorkerLabel::B, Position::new(0, 0)),
            (WorkerLabel::Y, Position::new(2, 2)),
            (WorkerLabel::Z, Position::new(0, 4)),
        ];
        assert_eq!(
            GameState::with_layout([[0; 5]; 5], placements),
            Err(StateError::SharedCell(Position::new(0, 0)))
        );

        let mut heights = [[0u8; 5]; 5];
        heights[2][2] = 4;
        let placements = [
            (WorkerLabel::A, Position::new(0, 0)),
            (WorkerLabel::B, Position::new(1, 0)),
            (WorkerLabel::Y, Position::new(2, 2)),
            (WorkerLabel::Z, Position::new(0, 4)),
        ];
        assert_eq!(
            GameState::with_layout(heights, placements),
            Err(StateError::OnCappedCell {
                label: WorkerLabel::Y,
                position: Position::new(2, 2),
            })
        );
        assert!(matches!(
            GameState::with_layout([[5; 5]; 5], placements),
            Err(StateError::HeightAboveCap { height: 5, .. })
        ));
    }
}
