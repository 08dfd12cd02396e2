//! Domino tiles.
//!
//! A `Tile` is a pair of pip values in `0..=6` stored in its current
//! orientation. Orientation only matters once a tile sits in the chain,
//! where the touching faces of neighbours must agree.
//!
//! ```
//! use dominoes::core::Tile;
//!
//! let mut tile = Tile::new(2, 5).unwrap();
//! assert!(!tile.is_double());
//!
//! tile.switch_orientation();
//! assert_eq!(tile.pips(), [5, 2]);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Result};

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// One domino piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pips: [u8; 2],
}

impl Tile {
    /// Create a tile, validating both pip values.
    pub fn new(first: i64, second: i64) -> Result<Self> {
        Ok(Self {
            pips: [Self::pip(first)?, Self::pip(second)?],
        })
    }

    fn pip(value: i64) -> Result<u8> {
        u8::try_from(value)
            .ok()
            .filter(|&p| p <= MAX_PIP)
            .ok_or(DominoError::InvalidTile)
    }

    /// Pips in current orientation.
    #[must_use]
    pub const fn pips(&self) -> [u8; 2] {
        self.pips
    }

    /// The face on the left when laid in a chain.
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.pips[0]
    }

    /// The face on the right when laid in a chain.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.pips[1]
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.pips[0] == self.pips[1]
    }

    /// Reverse the stored pair in place.
    pub fn switch_orientation(&mut self) {
        self.pips.swap(0, 1);
    }

    /// Check if either face shows `value`.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.pips.contains(&value)
    }

    /// Orientation-independent identity of the physical piece.
    ///
    /// Every unordered pair occurs once in a double-six set, so two tiles
    /// with the same key are the same piece.
    #[must_use]
    pub fn key(&self) -> (u8, u8) {
        let [a, b] = self.pips;
        (a.min(b), a.max(b))
    }

    /// Number of faces showing `value` (0, 1, or 2 for a double).
    #[must_use]
    pub fn count(&self, value: u8) -> usize {
        self.pips.iter().filter(|&&p| p == value).count()
    }
}

impl TryFrom<&[i64]> for Tile {
    type Error = DominoError;

    fn try_from(values: &[i64]) -> Result<Self> {
        match values {
            [a, b] => Self::new(*a, *b),
            _ => Err(DominoError::InvalidTile),
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.pips[0], self.pips[1])
    }
}
