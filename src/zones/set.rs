//! Ordered tile sets.
//!
//! `TileSet<P>` is the one concrete container. The type parameter picks the
//! append policy: plain `TileSet` (= `TileSet<Loose>`) for hands and stock,
//! `Chain` (= `TileSet<MatchOpenEnd>`) for the played row.
//!
//! ## Usage
//!
//! ```
//! use dominoes::core::GameRng;
//! use dominoes::zones::{TileContainer, TileSet};
//!
//! let mut stock = TileSet::full();
//! let mut rng = GameRng::new(42);
//!
//! let hand = stock.sample_and_remove(7, &mut rng).unwrap();
//! assert_eq!(hand.len(), 7);
//! assert_eq!(stock.len(), 21);
//! ```

use im::Vector;

use crate::core::{DominoError, End, GameRng, Result, Tile, MAX_PIP};

use super::container::{AppendPolicy, Loose, TileContainer};

/// An ordered collection of tiles.
///
/// Order is insertion order. Backed by `im::Vector` so snapshots are O(1)
/// and front insertion on the chain stays cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSet<P = Loose> {
    tiles: Vector<Tile>,
    policy: P,
}

impl<P: Default> TileSet<P> {
    pub(crate) fn from_vector(tiles: Vector<Tile>) -> Self {
        Self {
            tiles,
            policy: P::default(),
        }
    }
}

impl TileSet<Loose> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding `tiles` in the given order.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::from_vector(tiles.into_iter().collect())
    }

    /// The complete double-six set: `[i, j]` for `i in 0..=6`, `j in i..=6`.
    #[must_use]
    pub fn full() -> Self {
        let tiles = (0..=MAX_PIP).flat_map(|i| {
            (i..=MAX_PIP).map(move |j| Tile::new(i64::from(i), i64::from(j)))
        });
        Self::from_tiles(tiles.flatten())
    }
}

impl<P> TileSet<P> {
    /// Get the tile at a 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Iterate over tiles in order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Remove and return the tile at a 0-based index.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        (index < self.tiles.len()).then(|| self.tiles.remove(index))
    }

    /// Remove and return the last tile.
    pub fn pop_back(&mut self) -> Option<Tile> {
        self.tiles.pop_back()
    }

    /// Check if the same physical piece is present, in either orientation.
    #[must_use]
    pub fn contains_piece(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|t| t.key() == tile.key())
    }

    /// Move `count` uniformly random distinct tiles into a new set.
    ///
    /// The returned set holds the tiles in sampling order; the remaining
    /// tiles keep their relative order.
    pub fn sample_and_remove(&mut self, count: usize, rng: &mut GameRng) -> Result<TileSet> {
        let available = self.tiles.len();
        if count > available {
            return Err(DominoError::InsufficientTiles { requested: count, available });
        }

        let indices = rng.sample_indices(available, count);
        let part = TileSet::from_tiles(indices.iter().map(|&i| self.tiles[i]));

        let mut descending = indices;
        descending.sort_unstable_by(|a, b| b.cmp(a));
        for index in descending {
            self.tiles.remove(index);
        }

        Ok(part)
    }
}

impl<P: AppendPolicy> TileContainer for TileSet<P> {
    fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    fn append(&mut self, mut tile: Tile, end: End) {
        self.policy.orient(&self.tiles, &mut tile, end);
        match end {
            End::Right => self.tiles.push_back(tile),
            End::Left => self.tiles.push_front(tile),
        }
    }
}

impl std::fmt::Display for TileSet<Loose> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.values_string())
    }
}
