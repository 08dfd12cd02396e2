//! The tile container capability and its append strategies.
//!
//! Hands, stock, and chain are all ordered rows of tiles. They differ only in
//! what happens to a tile on its way in: a hand takes it as is, the chain
//! turns it so the touching faces match. That difference is an
//! `AppendPolicy`; everything else is shared through `TileContainer`.

use im::Vector;

use crate::core::{DominoError, End, Result, Tile};

/// Decides how a tile is oriented before it joins a row.
pub trait AppendPolicy {
    /// Adjust `tile` in place before it is inserted at `end` of `tiles`.
    fn orient(&self, tiles: &Vector<Tile>, tile: &mut Tile, end: End);
}

/// Accept tiles in whatever orientation they arrive (hands, stock).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loose;

impl AppendPolicy for Loose {
    fn orient(&self, _tiles: &Vector<Tile>, _tile: &mut Tile, _end: End) {}
}

/// An ordered row of tiles with two addressable ends.
pub trait TileContainer {
    /// Tiles in container order.
    fn tiles(&self) -> &Vector<Tile>;

    /// Insert at the back (`Right`) or front (`Left`).
    fn append(&mut self, tile: Tile, end: End);

    fn len(&self) -> usize {
        self.tiles().len()
    }

    fn is_empty(&self) -> bool {
        self.tiles().is_empty()
    }

    /// The exposed pip value at `end`.
    ///
    /// `Right` is the second pip of the last tile, `Left` the first pip of
    /// the first tile.
    fn end_value(&self, end: End) -> Result<u8> {
        let tiles = self.tiles();
        match end {
            End::Right => tiles.back().map(Tile::second),
            End::Left => tiles.front().map(Tile::first),
        }
        .ok_or(DominoError::EmptySet)
    }

    /// Doubles in container order.
    fn doubles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles().iter().filter(|tile| tile.is_double())
    }

    /// The double with the highest pip value, if any.
    fn largest_double(&self) -> Option<&Tile> {
        self.doubles().max_by_key(|tile| tile.first())
    }

    /// Every face of every tile, in container order.
    fn pip_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles().iter().flat_map(|tile| tile.pips())
    }

    /// Tiles as a bracketed list, e.g. `[[0, 1], [5, 6]]`.
    fn values_string(&self) -> String {
        let inner: Vec<String> = self.tiles().iter().map(Tile::to_string).collect();
        format!("[{}]", inner.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::TileSet;

    fn tile(a: i64, b: i64) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn test_loose_keeps_orientation() {
        let tiles = Vector::from(vec![tile(1, 2)]);
        let mut incoming = tile(5, 1);
        Loose.orient(&tiles, &mut incoming, End::Left);
        assert_eq!(incoming, tile(5, 1));
    }

    #[test]
    fn test_end_values() {
        let set = TileSet::from_tiles([tile(1, 2), tile(3, 4)]);
        assert_eq!(set.end_value(End::Left), Ok(1));
        assert_eq!(set.end_value(End::Right), Ok(4));
    }

    #[test]
    fn test_end_value_empty() {
        let set = TileSet::new();
        assert_eq!(set.end_value(End::Left), Err(DominoError::EmptySet));
        assert_eq!(set.end_value(End::Right), Err(DominoError::EmptySet));
    }

    #[test]
    fn test_append_sides() {
        let mut set = TileSet::new();
        set.append(tile(1, 1), End::Right);
        set.append(tile(2, 2), End::Right);
        set.append(tile(0, 0), End::Left);
        assert_eq!(set.values_string(), "[[0, 0], [1, 1], [2, 2]]");
    }

    #[test]
    fn test_doubles_none() {
        let set = TileSet::from_tiles([tile(0, 1), tile(5, 6)]);
        assert_eq!(set.doubles().count(), 0);
        assert_eq!(set.largest_double(), None);
        assert_eq!(TileSet::new().largest_double(), None);
    }

    #[test]
    fn test_largest_double_in_partial_set() {
        let set = TileSet::from_tiles([tile(2, 2), tile(0, 4), tile(5, 5), tile(1, 1)]);
        assert_eq!(set.largest_double(), Some(&tile(5, 5)));
    }

    #[test]
    fn test_pip_values() {
        let set = TileSet::from_tiles([tile(1, 2), tile(3, 3)]);
        let values: Vec<_> = set.pip_values().collect();
        assert_eq!(values, vec![1, 2, 3, 3]);
    }
}
