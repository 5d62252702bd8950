//! # santorini
//!
//! Rules engine and turn coordinator for the Santorini board game on a 5×5
//! grid, with snapshot-based undo/redo.
//!
//! ## Design Principles
//!
//! 1. **Handles, not references**: workers live in a fixed arena and are
//!    named by `WorkerLabel`. The board, strategies and history all refer to
//!    workers by label, so restoring a snapshot cannot leave anything
//!    pointing at a dead worker.
//!
//! 2. **State by value**: `GameState` is cheap to clone (`im::Vector`
//!    cells). Hypothetical moves, scratch input validation and turn
//!    application all work on copies.
//!
//! 3. **Errors are values**: illegal input comes back as `RulesError`;
//!    the caller decides whether to re-prompt.
//!
//! ## Modules
//!
//! - `core`: directions, positions, cells, workers, board, state, config, RNG
//! - `rules`: end-of-game detection and legal-turn enumeration
//! - `history`: encoded snapshots and the undo/redo stacks
//! - `players`: human, random and heuristic strategies
//! - `game`: console, session errors and the turn coordinator

pub mod core;
pub mod game;
pub mod history;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, GameConfig, GameRng, GameState, PlayerKind, Position, RulesError,
    Side, SideMap, StateError, Turn, TurnRecord, Worker, WorkerArena, WorkerLabel,
};

pub use crate::rules::{check_end_of_game, legal_turns, GameResult, WinReason};

pub use crate::history::{History, HistoryError, Snapshot};

pub use crate::players::{
    build_strategy, HeuristicStrategy, HumanStrategy, RandomStrategy, Strategy,
};

pub use crate::game::{Console, GameError, IoConsole, Session};
