//! The two sides and per-side data storage.
//!
//! ## Side
//!
//! White moves first and controls workers `A` and `B`; blue controls `Y` and
//! `Z`.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::worker::WorkerLabel;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Blue,
}

impl Side {
    /// Both sides, white first.
    pub const BOTH: [Side; 2] = [Side::White, Side::Blue];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::White => Side::Blue,
            Side::Blue => Side::White,
        }
    }

    /// The two workers this side controls.
    #[must_use]
    pub const fn labels(self) -> [WorkerLabel; 2] {
        match self {
            Side::White => [WorkerLabel::A, WorkerLabel::B],
            Side::Blue => [WorkerLabel::Y, WorkerLabel::Z],
        }
    }

    /// Index into per-side storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Blue => 1,
        }
    }

    /// Side and worker labels, e.g. `white (AB)`.
    #[must_use]
    pub fn describe(self) -> String {
        let [first, second] = self.labels();
        format!("{} ({}{})", self, first, second)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Blue => f.write_str("blue"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use santorini::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::Blue] += 1;
/// assert_eq!(wins[Side::White], 0);
/// assert_eq!(wins[Side::Blue], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
