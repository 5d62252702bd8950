//! Snapshot history for undo and redo.
//!
//! - `Snapshot`: immutable encoded copy of a `GameState`
//! - `History`: the undo and redo stacks

pub mod caretaker;
pub mod snapshot;

pub use caretaker::History;
pub use snapshot::Snapshot;

use thiserror::Error;

use crate::core::StateError;

/// Failure while capturing or restoring a snapshot.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to encode snapshot")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot")]
    Decode(#[source] bincode::Error),

    #[error("snapshot violates board invariants")]
    Corrupt(#[source] StateError),

    /// Every remaining snapshot on the stack failed to restore.
    #[error("no restorable snapshot left ({discarded} discarded)")]
    Exhausted { discarded: usize },
}
