//! Greedy one-ply heuristic.
//!
//! For each worker, every legal move is scored by the position the side
//! would then hold:
//!
//! ```text
//! score = 3·height + 2·center + distance
//! ```
//!
//! where `height` and `center` sum over both friendly workers and
//! `distance = 8 − Σ (distance from each friendly worker to the nearest
//! opponent)`. The best-scoring move of each worker is kept (first one wins
//! ties); the second worker is preferred when the two bests tie. The build is
//! chosen uniformly among the legal builds.

use crate::core::{
    Board, Direction, GameRng, GameState, PlayerKind, Position, Side, Turn, WorkerLabel,
};
use crate::game::{Console, GameError};
use crate::rules::builds_for;

use super::Strategy;

/// The three scoring features for a pair of friendly positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub height: i32,
    pub center: i32,
    pub distance: i32,
}

impl Evaluation {
    /// Score `friendly` against `opponents` on `board`.
    #[must_use]
    pub fn of(board: &Board, friendly: [Position; 2], opponents: &[Position]) -> Self {
        let [first, second] = friendly;
        Self {
            height: board.height_score(first, second),
            center: board.center_score(first, second),
            distance: board.distance_score(friendly, opponents),
        }
    }

    /// Score `side` as it currently stands.
    #[must_use]
    pub fn current(state: &GameState, side: Side) -> Self {
        let labels = side.labels();
        let friendly = labels.map(|label| state.worker(label).position);
        let opponents = state.board.other_workers_positions(&labels);
        Self::of(&state.board, friendly, &opponents)
    }

    /// Weighted total used to rank moves.
    #[must_use]
    pub fn total(&self) -> i32 {
        3 * self.height + 2 * self.center + self.distance
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.center, self.distance)
    }
}

/// Greedy move scorer with a random build.
#[derive(Clone, Debug)]
pub struct HeuristicStrategy {
    rng: GameRng,
}

impl HeuristicStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Best (score, direction) for the worker in slot `slot` of `side`.
    fn best_move(state: &GameState, side: Side, slot: usize) -> Option<(i32, Direction)> {
        let labels = side.labels();
        let friendly = labels.map(|label| state.worker(label).position);
        let opponents = state.board.other_workers_positions(&labels);
        let origin = friendly[slot];

        let mut best: Option<(i32, Direction)> = None;
        for direction in state.board.possible_moves(origin) {
            let Some(target) = origin.step(direction) else {
                continue;
            };
            let mut candidate = friendly;
            candidate[slot] = target;
            let score = state.board.move_score(candidate, &opponents);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, direction));
            }
        }
        best
    }
}

impl Strategy for HeuristicStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Heuristic
    }

    fn decide(
        &mut self,
        state: &GameState,
        side: Side,
        _console: &mut dyn Console,
    ) -> Result<Turn, GameError> {
        let [first, second]: [WorkerLabel; 2] = side.labels();
        let first_best = Self::best_move(state, side, 0);
        let second_best = Self::best_move(state, side, 1);

        let (worker, move_dir) = match (first_best, second_best) {
            (Some((a, dir)), Some((b, _))) if a > b => (first, dir),
            (Some((_, dir)), None) => (first, dir),
            (_, Some((_, dir))) => (second, dir),
            (None, None) => return Err(GameError::NoLegalTurn(side)),
        };

        let builds = builds_for(state, worker, move_dir);
        let build_dir = *self.rng.choose(&builds).ok_or(GameError::NoLegalTurn(side))?;

        Ok(Turn::new(worker, move_dir, build_dir))
    }
}
