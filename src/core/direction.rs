//! Compass directions and the shared offset table.
//!
//! Every component that steps across the grid (legality checks, move and
//! build application, strategies) goes through [`Direction::offset`], so the
//! eight `(row, col)` deltas live in exactly one place.
//!
//! ## Tokens
//!
//! Directions cross the input boundary as lowercase compass abbreviations:
//! `n`, `ne`, `e`, `se`, `s`, `sw`, `w`, `nw`. Anything else is rejected with
//! [`RulesError::InvalidDirection`].
//!
//! ```
//! use santorini::core::Direction;
//!
//! let d: Direction = "ne".parse().unwrap();
//! assert_eq!(d.offset(), (-1, 1));
//! assert!("up".parse::<Direction>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::RulesError;

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// A set of directions, in compass order.
///
/// There are never more than eight, so this stays on the stack.
pub type Directions = SmallVec<[Direction; 8]>;

impl Direction {
    /// All directions in compass order, starting north and turning clockwise.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Row and column delta for this direction.
    ///
    /// Rows grow downwards (south), columns grow to the right (east).
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// The boundary token for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }

    /// Parse a boundary token.
    ///
    /// Only the exact lowercase abbreviations are accepted.
    pub fn parse_token(token: &str) -> Result<Self, RulesError> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.token() == token)
            .ok_or_else(|| RulesError::InvalidDirection(token.to_string()))
    }
}

impl FromStr for Direction {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse_token(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_match_compass() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(
            offsets,
            vec![(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1)]
        );
    }

    #[test]
    fn test_offsets_are_distinct_neighbours() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dr, dc) = a.offset();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert_ne!((dr, dc), (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.offset(), b.offset());
            }
        }
    }

    #[test]
    fn test_token_round_trip() {
        for d in Direction::ALL {
            assert_eq!(d.token().parse::<Direction>().unwrap(), d);
            assert_eq!(format!("{}", d), d.token());
        }
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["", "N", "north", "nn", " n", "en", "x"] {
            match token.parse::<Direction>() {
                Err(RulesError::InvalidDirection(t)) => assert_eq!(t, token),
                other => panic!("unexpected result for {:?}: {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::SW).unwrap();
        let deserialized: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Direction::SW);
    }
}
