//! Computer move selection.
//!
//! Policies are trait-based so the engine can be driven by any strategy:
//! - `MovePolicy`: Pick a move descriptor from a hand and the chain
//! - `RarityHeuristic`: The default greedy computer player

mod heuristic;

pub use heuristic::RarityHeuristic;

use crate::core::Move;
use crate::zones::{Chain, TileSet};

/// Policy for choosing the computer's move.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `hand` against `chain`.
    ///
    /// Must return either `Move::DRAW` or a descriptor whose tile fits the
    /// chosen end; the engine treats anything else as a bug.
    fn select(&self, hand: &TileSet, chain: &Chain) -> Move;
}
