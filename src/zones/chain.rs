//! The chain of played tiles (the "snake").
//!
//! A `Chain` is a `TileSet` whose append policy turns each incoming tile so
//! that the face touching the chain equals the open value at that end. The
//! policy does not judge legality; callers check `accepts` first.
//!
//! ```
//! use dominoes::core::{End, Tile};
//! use dominoes::zones::{Chain, TileContainer};
//!
//! let mut chain = Chain::default();
//! chain.append(Tile::new(6, 6).unwrap(), End::Right);
//! chain.append(Tile::new(3, 6).unwrap(), End::Right);
//!
//! assert_eq!(chain.end_value(End::Right), Ok(3));
//! assert_eq!(chain.to_string(), "[6, 6][6, 3]");
//! ```

use im::Vector;

use crate::core::{End, Tile};

use super::container::{AppendPolicy, TileContainer};
use super::set::TileSet;

/// Longest chain rendered in full.
const DISPLAY_LIMIT: usize = 6;

/// Tiles shown at each side of an abbreviated chain.
const DISPLAY_EDGE: usize = 3;

/// Flip incoming tiles so their touching face matches the open end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOpenEnd;

impl AppendPolicy for MatchOpenEnd {
    fn orient(&self, tiles: &Vector<Tile>, tile: &mut Tile, end: End) {
        let mismatched = match end {
            End::Right => tiles.back().is_some_and(|last| tile.first() != last.second()),
            End::Left => tiles.front().is_some_and(|first| tile.second() != first.first()),
        };
        if mismatched {
            tile.switch_orientation();
        }
    }
}

/// The played row of tiles.
pub type Chain = TileSet<MatchOpenEnd>;

impl Chain {
    /// Create a chain holding `tiles` exactly as given.
    ///
    /// No orientation fixup is applied; use `is_connected` to validate.
    pub fn from_played(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::from_vector(tiles.into_iter().collect())
    }

    /// Check if `tile` may be attached at `end`.
    ///
    /// Any tile may start an empty chain.
    #[must_use]
    pub fn accepts(&self, tile: &Tile, end: End) -> bool {
        self.end_value(end).map_or(true, |open| tile.contains(open))
    }

    /// Both open values, `None` while the chain is empty.
    #[must_use]
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        Some((self.end_value(End::Left).ok()?, self.end_value(End::Right).ok()?))
    }

    /// Check the matching invariant: every adjacent pair shares its
    /// touching pip values.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let tiles = self.tiles();
        tiles
            .iter()
            .zip(tiles.iter().skip(1))
            .all(|(left, right)| left.second() == right.first())
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tiles = self.tiles();
        if tiles.len() > DISPLAY_LIMIT {
            for tile in tiles.iter().take(DISPLAY_EDGE) {
                write!(f, "{tile}")?;
            }
            write!(f, "...")?;
            for tile in tiles.iter().skip(tiles.len() - DISPLAY_EDGE) {
                write!(f, "{tile}")?;
            }
        } else {
            for tile in tiles {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}
