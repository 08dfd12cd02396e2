//! Rarity-based move selection.

use smallvec::SmallVec;

use crate::core::{End, Move, MAX_PIP};
use crate::zones::{Chain, TileContainer, TileSet};

use super::MovePolicy;

/// Per-position scores; hands rarely grow past this without spilling.
type Scores = SmallVec<[usize; 16]>;

/// Greedy computer player.
///
/// Counts how often each pip value shows in the hand and on the chain, scores
/// every tile in hand by the counts of its two faces, and plays the highest
/// scoring tile that fits, trying the right end before the left. Dumping
/// tiles whose values are common keeps the hand flexible later.
#[derive(Clone, Copy, Debug, Default)]
pub struct RarityHeuristic;

impl RarityHeuristic {
    /// Occurrences of each pip value across hand and chain faces.
    #[must_use]
    pub fn pip_counts(hand: &TileSet, chain: &Chain) -> [usize; MAX_PIP as usize + 1] {
        let mut counts = [0; MAX_PIP as usize + 1];
        for pip in hand.pip_values().chain(chain.pip_values()) {
            counts[usize::from(pip)] += 1;
        }
        counts
    }

    /// Score of each tile in hand, in hand order.
    #[must_use]
    pub fn scores(hand: &TileSet, chain: &Chain) -> Scores {
        let counts = Self::pip_counts(hand, chain);
        hand.iter()
            .map(|tile| counts[usize::from(tile.first())] + counts[usize::from(tile.second())])
            .collect()
    }
}

impl MovePolicy for RarityHeuristic {
    fn select(&self, hand: &TileSet, chain: &Chain) -> Move {
        let scores = Self::scores(hand, chain);

        // Stable: equal scores keep hand order.
        let mut order: SmallVec<[usize; 16]> = (0..hand.len()).collect();
        order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

        for index in order {
            let Some(tile) = hand.get(index) else { continue };
            for end in [End::Right, End::Left] {
                if chain.accepts(tile, end) {
                    return Move::attach(index + 1, end);
                }
            }
        }

        Move::DRAW
    }
}
