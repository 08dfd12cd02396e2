//! Tile containers: hands, stock, and the chain.
//!
//! ## Key Types
//!
//! - `TileContainer`: Shared queries and `append` for any row of tiles
//! - `AppendPolicy`: How a tile is oriented on the way in
//! - `TileSet`: Ordered set with `Loose` policy (hands, stock)
//! - `Chain`: `TileSet` with `MatchOpenEnd` policy (the played row)

pub mod container;
pub mod set;
pub mod chain;

pub use container::{AppendPolicy, Loose, TileContainer};
pub use set::TileSet;
pub use chain::{Chain, MatchOpenEnd};
