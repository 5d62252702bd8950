//! Undo/redo stacks.
//!
//! ## Protocol
//!
//! - `commit`: push a snapshot of the live state onto the undo stack.
//! - `undo`: snapshot the live state onto the redo stack, then restore the
//!   most recent undo snapshot.
//! - `redo`: the mirror image.
//! - `next`: `commit`, then drop the redo stack. Called when a side plays an
//!   ordinary turn instead of undoing or redoing.
//!
//! A snapshot that fails to restore is discarded and the next older one is
//! tried. The loop is bounded by the stack length; if nothing restores, the
//! live state is left untouched and `HistoryError::Exhausted` is returned.

use tracing::{debug, warn};

use crate::core::GameState;

use super::snapshot::Snapshot;
use super::HistoryError;

/// Undo and redo stacks of snapshots.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot of `state` onto the undo stack.
    pub fn commit(&mut self, state: &GameState) -> Result<(), HistoryError> {
        self.undo.push(Snapshot::capture(state)?);
        debug!(undo = self.undo.len(), "committed snapshot");
        Ok(())
    }

    /// Commit and clear the redo stack.
    pub fn next(&mut self, state: &GameState) -> Result<(), HistoryError> {
        self.commit(state)?;
        self.redo.clear();
        Ok(())
    }

    /// Restore the most recent undo snapshot into `state`.
    ///
    /// Returns `Ok(false)` without touching anything if there is nothing to
    /// undo.
    pub fn undo(&mut self, state: &mut GameState) -> Result<bool, HistoryError> {
        let restored = step(&mut self.undo, &mut self.redo, state)?;
        debug!(restored, undo = self.undo.len(), redo = self.redo.len(), "undo");
        Ok(restored)
    }

    /// Restore the most recent redo snapshot into `state`.
    ///
    /// Returns `Ok(false)` without touching anything if there is nothing to
    /// redo.
    pub fn redo(&mut self, state: &mut GameState) -> Result<bool, HistoryError> {
        let restored = step(&mut self.redo, &mut self.undo, state)?;
        debug!(restored, undo = self.undo.len(), redo = self.redo.len(), "redo");
        Ok(restored)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of snapshots on the undo stack.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of snapshots on the redo stack.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    #[cfg(test)]
    pub(crate) fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
    }
}

/// Pop from `from` until a snapshot restores, saving the live state onto `to`.
fn step(
    from: &mut Vec<Snapshot>,
    to: &mut Vec<Snapshot>,
    state: &mut GameState,
) -> Result<bool, HistoryError> {
    if from.is_empty() {
        return Ok(false);
    }

    let current = Snapshot::capture(state)?;
    let mut discarded = 0;

    while let Some(snapshot) = from.pop() {
        match snapshot.restore() {
            Ok(restored) => {
                to.push(current);
                *state = restored;
                return Ok(true);
            }
            Err(err) => {
                warn!(error = %err, "discarding snapshot that failed to restore");
                discarded += 1;
            }
        }
    }

    Err(HistoryError::Exhausted { discarded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position, Turn, WorkerLabel};

    fn play(state: &mut GameState, turn: Turn) {
        state.apply_turn(turn).unwrap();
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = History::new();
        let mut state = GameState::new();
        let before = state.clone();

        assert_eq!(history.undo(&mut state).unwrap(), false);
        assert_eq!(history.redo(&mut state).unwrap(), false);
        assert_eq!(state, before);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_undo_restores_committed_state() {
        let mut history = History::new();
        let mut state = GameState::new();
        let before = state.clone();

        history.commit(&state).unwrap();
        play(&mut state, Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        let after = state.clone();

        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, before);
        assert!(history.can_redo());

        assert!(history.redo(&mut state).unwrap());
        assert_eq!(state, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_without_mutation_is_identity() {
        let mut history = History::new();
        let mut state = GameState::new();
        let before = state.clone();

        history.commit(&state).unwrap();
        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, before);
    }

    #[test]
    fn test_next_clears_redo() {
        let mut history = History::new();
        let mut state = GameState::new();

        history.next(&state).unwrap();
        play(&mut state, Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        assert!(history.undo(&mut state).unwrap());
        assert_eq!(history.redo_len(), 1);

        history.next(&state).unwrap();
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.redo(&mut state).unwrap(), false);
    }

    #[test]
    fn test_multiple_undos_walk_back() {
        let mut history = History::new();
        let mut state = GameState::new();
        let start = state.clone();

        history.next(&state).unwrap();
        play(&mut state, Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        let middle = state.clone();

        history.next(&state).unwrap();
        play(&mut state, Turn::new(WorkerLabel::Y, Direction::N, Direction::S));
        let end = state.clone();

        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, middle);
        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, start);
        assert_eq!(history.undo(&mut state).unwrap(), false);

        assert!(history.redo(&mut state).unwrap());
        assert!(history.redo(&mut state).unwrap());
        assert_eq!(state, end);
    }

    #[test]
    fn test_failed_snapshot_falls_back_to_older() {
        let mut history = History::new();
        let mut state = GameState::new();
        let start = state.clone();

        history.commit(&state).unwrap();
        history.push_undo(Snapshot::from_bytes(vec![1, 2, 3]));
        play(&mut state, Turn::new(WorkerLabel::A, Direction::N, Direction::E));

        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, start);
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 1);
    }

    #[test]
    fn test_exhausted_stack_leaves_state_alone() {
        let mut history = History::new();
        let mut state = GameState::new();
        play(&mut state, Turn::new(WorkerLabel::A, Direction::N, Direction::E));
        let live = state.clone();

        let mut broken = GameState::new();
        broken.workers[WorkerLabel::B].relocate(Position::new(0, 0), 0);
        history.push_undo(Snapshot::capture(&broken).unwrap());
        history.push_undo(Snapshot::from_bytes(vec![]));

        match history.undo(&mut state) {
            Err(HistoryError::Exhausted { discarded }) => assert_eq!(discarded, 2),
            other => panic!("expected exhaustion, got {:?}", other),
        }
        assert_eq!(state, live);
        assert_eq!(history.redo_len(), 0);
        assert!(!history.can_undo());
    }
}
