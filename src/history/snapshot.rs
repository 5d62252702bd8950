//! Immutable encoded copies of the game state.
//!
//! A snapshot holds the bincode encoding of a [`GameState`], so it cannot
//! alias the live board and cannot be mutated after capture. Restoring
//! decodes a fresh state and checks its occupancy invariants before handing
//! it back.

use crate::core::GameState;

use super::HistoryError;

/// An immutable copy of the game state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    bytes: Vec<u8>,
}

impl Snapshot {
    /// Capture `state`.
    pub fn capture(state: &GameState) -> Result<Self, HistoryError> {
        let bytes = bincode::serialize(state).map_err(HistoryError::Encode)?;
        Ok(Self { bytes })
    }

    /// Decode a fresh, validated copy of the captured state.
    pub fn restore(&self) -> Result<GameState, HistoryError> {
        let state: GameState = bincode::deserialize(&self.bytes).map_err(HistoryError::Decode)?;
        state.validate().map_err(HistoryError::Corrupt)?;
        Ok(state)
    }

    /// Size of the encoding in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.bytes.len()
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}
