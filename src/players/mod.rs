//! Decision strategies for the two sides.
//!
//! A strategy turns the current state into a [`Turn`]. It never keeps a
//! reference to the board or the workers between calls: the session passes
//! the state and the console on every decision, so a snapshot restore can
//! never leave a strategy holding stale handles.
//!
//! ## Strategies
//!
//! - [`HumanStrategy`]: prompts for worker, move and build, re-prompting on
//!   every rejected input
//! - [`RandomStrategy`]: uniform choice among legal options
//! - [`HeuristicStrategy`]: greedy one-ply scorer, random build

pub mod heuristic;
pub mod human;
pub mod random;

pub use heuristic::{Evaluation, HeuristicStrategy};
pub use human::HumanStrategy;
pub use random::RandomStrategy;

use crate::core::{GameRng, GameState, PlayerKind, Side, Turn};
use crate::game::{Console, GameError};

/// Decides the turns of one side.
pub trait Strategy {
    /// Which kind of strategy this is.
    fn kind(&self) -> PlayerKind;

    /// Pick a complete turn for `side`.
    ///
    /// Automated strategies only pick from precomputed legal sets; the
    /// returned turn must apply cleanly to `state`.
    fn decide(
        &mut self,
        state: &GameState,
        side: Side,
        console: &mut dyn Console,
    ) -> Result<Turn, GameError>;
}

/// Build the strategy for `kind`.
///
/// `rng` seeds the random choices of the automated strategies.
#[must_use]
pub fn build_strategy(kind: PlayerKind, rng: GameRng) -> Box<dyn Strategy> {
    match kind {
        PlayerKind::Human => Box::new(HumanStrategy::new()),
        PlayerKind::Random => Box::new(RandomStrategy::new(rng)),
        PlayerKind::Heuristic => Box::new(HeuristicStrategy::new(rng)),
    }
}
