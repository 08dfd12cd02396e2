//! Seats at the table and per-seat data storage.
//!
//! ## Seat
//!
//! The two participants: the human `Player` and the `Computer`.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`, used for the hands.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Computer,
}

impl Seat {
    /// Both seats, player first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Computer];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Computer,
            Seat::Computer => Seat::Player,
        }
    }

    const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Computer => write!(f, "computer"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use dominoes::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<u32> = SeatMap::new(|_| 7);
/// counts[Seat::Computer] -= 1;
///
/// assert_eq!(counts[Seat::Player], 7);
/// assert_eq!(counts[Seat::Computer], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Computer)],
        }
    }

    /// Create from explicit per-seat values.
    pub fn from_values(player: T, computer: T) -> Self {
        Self {
            data: [player, computer],
        }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
