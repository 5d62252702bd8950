//! Game rules on top of the board.
//!
//! - When the game ends and who won
//! - Which complete turns a side may play
//!
//! The board answers single move/build questions; this module composes
//! them into whole turns and end-of-game decisions.

pub mod engine;

pub use engine::{builds_for, check_end_of_game, legal_turns, GameResult, WinReason, WINNING_HEIGHT};
