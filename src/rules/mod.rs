//! Game rules: dealing, move legality, move application, and end detection.
//!
//! `GameEngine` is the single owner of game state. Callers drive it turn by
//! turn and query `status()` after each move.

pub mod engine;
pub mod terminal;

pub use engine::GameEngine;
pub use terminal::Status;
