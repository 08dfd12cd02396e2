//! Core value types: tiles, seats, moves, RNG, configuration, errors.
//!
//! Everything here is independent of how tiles are stored or how a game
//! is run.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use tile::{Tile, MAX_PIP};
pub use player::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::{GameConfig, BLOCKING_COUNT, FULL_SET_SIZE, HAND_SIZE};
pub use action::{End, Move, MoveRecord};
pub use error::{DominoError, Rejection, Result};
