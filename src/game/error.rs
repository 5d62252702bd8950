//! Session-level errors.

use std::io;
use thiserror::Error;

use crate::core::{RulesError, Side};
use crate::history::HistoryError;

/// Failure while running a game session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("console I/O failed")]
    Io(#[from] io::Error),

    /// The input stream ended while a decision was pending.
    #[error("input closed")]
    InputClosed,

    /// A strategy was asked to decide with nothing legal to play.
    #[error("{0} has no legal turn")]
    NoLegalTurn(Side),
}
