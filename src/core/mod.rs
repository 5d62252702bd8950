//! Core game types: directions, positions, cells, workers, board, state.
//!
//! Everything with an invariant lives here: the legality rules, the
//! occupancy bookkeeping, and the worker arena.

pub mod action;
pub mod board;
pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod position;
pub mod rng;
pub mod side;
pub mod state;
pub mod worker;

pub use action::{Turn, TurnRecord};
pub use board::Board;
pub use cell::{Cell, CAPPED_HEIGHT};
pub use config::{GameConfig, PlayerKind};
pub use direction::{Direction, Directions};
pub use error::{RulesError, StateError};
pub use position::{Position, BOARD_SIZE};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::GameState;
pub use worker::{Worker, WorkerArena, WorkerLabel};
