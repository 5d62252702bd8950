//! Seeded randomness for the automated strategies.
//!
//! One seed drives a whole game. Each side draws from its own stream, so
//! swapping one side's strategy does not change the other side's choices.
//!
//! ```
//! use santorini::core::{Direction, GameRng, Side};
//!
//! let rng = GameRng::new(42);
//! let mut white = rng.for_side(Side::White);
//! assert!(white.choose(&Direction::ALL).is_some());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::side::Side;

/// Spreads side indices across the seed space.
const SIDE_STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one side, derived from this RNG's seed.
    #[must_use]
    pub fn for_side(&self, side: Side) -> Self {
        let salt = SIDE_STREAM_MIX.wrapping_mul(side.index() as u64 + 1);
        Self::new(self.seed ^ salt)
    }

    /// Pick one element uniformly; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }
}
