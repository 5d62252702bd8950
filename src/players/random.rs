//! Uniform random strategy.

use crate::core::{GameRng, GameState, PlayerKind, Side, Turn};
use crate::game::{Console, GameError};
use crate::rules::builds_for;

use super::Strategy;

/// Picks a movable worker, then a move, then a build, each uniformly.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn decide(
        &mut self,
        state: &GameState,
        side: Side,
        _console: &mut dyn Console,
    ) -> Result<Turn, GameError> {
        let movable: Vec<_> = side
            .labels()
            .into_iter()
            .filter(|&label| !state.moves_for(label).is_empty())
            .collect();
        let worker = *self.rng.choose(&movable).ok_or(GameError::NoLegalTurn(side))?;

        let moves = state.moves_for(worker);
        let move_dir = *self.rng.choose(&moves).ok_or(GameError::NoLegalTurn(side))?;

        let builds = builds_for(state, worker, move_dir);
        let build_dir = *self.rng.choose(&builds).ok_or(GameError::NoLegalTurn(side))?;

        Ok(Turn::new(worker, move_dir, build_dir))
    }
}
