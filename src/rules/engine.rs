//! End-of-game detection and legal-turn enumeration.
//!
//! The end-of-game check runs before every turn as two independent checks
//! on the current state:
//! 1. the side that just moved has a worker standing on height 3, or
//! 2. the side about to move has no legal move with either worker.
//!
//! Either one ends the game in favour of the side that just moved.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Direction, Directions, GameState, Side, Turn, WorkerLabel};

/// Height a worker must stand on to win.
pub const WINNING_HEIGHT: u8 = 3;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner has a worker on height 3.
    ReachedTop,
    /// The loser had no legal move for either worker.
    Immobilized,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has won", self.winner)
    }
}

/// Check whether the game is over before `to_move` takes its turn.
///
/// Returns `Some(result)` if the game has ended, `None` if it continues.
#[must_use]
pub fn check_end_of_game(state: &GameState, to_move: Side) -> Option<GameResult> {
    let opponent = to_move.other();

    if state.workers.of_side(opponent).any(|w| w.height == WINNING_HEIGHT) {
        info!(winner = %opponent, "worker reached the top level");
        return Some(GameResult {
            winner: opponent,
            reason: WinReason::ReachedTop,
        });
    }

    if !state.has_moves(to_move) {
        info!(winner = %opponent, loser = %to_move, "side is immobilized");
        return Some(GameResult {
            winner: opponent,
            reason: WinReason::Immobilized,
        });
    }

    None
}

/// Enumerate every legal turn for `side`.
///
/// Build directions are evaluated from the destination with the source
/// vacated, so every returned turn applies cleanly.
#[must_use]
pub fn legal_turns(state: &GameState, side: Side) -> Vec<Turn> {
    let mut turns = Vec::new();

    for label in side.labels() {
        let position = state.worker(label).position;
        for move_dir in state.board.possible_moves(position) {
            for build_dir in state.board.builds_after_move(position, move_dir) {
                turns.push(Turn::new(label, move_dir, build_dir));
            }
        }
    }

    turns
}

/// Legal build directions for `worker` after it moves `move_dir`.
#[must_use]
pub fn builds_for(state: &GameState, worker: WorkerLabel, move_dir: Direction) -> Directions {
    state.board.builds_after_move(state.worker(worker).position, move_dir)
}
