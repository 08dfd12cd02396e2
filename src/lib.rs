//! # dominoes
//!
//! A two-player (human vs. computer) double-six domino engine.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: Every tile lives in exactly one container (a hand,
//!    the stock, or the chain) and moves between them, never copied.
//!
//! 2. **Policy Over Inheritance**: The chain is a tile set with a different
//!    append policy, not a subclass. Orientation fixup is a pluggable
//!    `AppendPolicy`.
//!
//! 3. **Deterministic**: A seed fully determines the deal.
//!
//! ## Modules
//!
//! - `core`: Tiles, seats, moves, RNG, configuration, errors
//! - `zones`: Tile containers and the chain
//! - `policy`: Computer move selection
//! - `rules`: The game engine and end-of-game detection

pub mod core;
pub mod zones;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DominoError, End, GameConfig, GameRng, Move, MoveRecord, Rejection, Result, Seat, SeatMap,
    Tile,
};

pub use crate::zones::{AppendPolicy, Chain, Loose, MatchOpenEnd, TileContainer, TileSet};

pub use crate::policy::{MovePolicy, RarityHeuristic};

pub use crate::rules::{GameEngine, Status};
