//! End-of-game detection.
//!
//! A game ends when a hand runs out (that hand's owner wins) or when the
//! chain is blocked: both end tiles share a value `v` and `v` shows on the
//! chain often enough that no tile carrying it can remain in play.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap, BLOCKING_COUNT};
use crate::zones::{Chain, TileContainer, TileSet};

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    WonByPlayer,
    WonByComputer,
    Draw,
}

impl Status {
    /// The winning status for `seat`.
    #[must_use]
    pub const fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::Player => Status::WonByPlayer,
            Seat::Computer => Status::WonByComputer,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// The winner, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Status::WonByPlayer => Some(Seat::Player),
            Status::WonByComputer => Some(Seat::Computer),
            Status::InProgress | Status::Draw => None,
        }
    }
}

/// First value shared by the chain's first and last tiles.
///
/// Scans the first tile's faces in order. `None` for chains shorter than
/// two tiles.
#[must_use]
pub fn shared_end_value(chain: &Chain) -> Option<u8> {
    if chain.len() < 2 {
        return None;
    }
    let tiles = chain.tiles();
    let (first, last) = (tiles.front()?, tiles.back()?);
    first.pips().into_iter().find(|&pip| last.contains(pip))
}

/// The shared end value and how often it shows.
///
/// The two end tiles contribute 2 together; every interior face showing the
/// value adds 1, so an interior double adds 2.
#[must_use]
pub fn blocking_count(chain: &Chain) -> Option<(u8, usize)> {
    let value = shared_end_value(chain)?;
    let interior: usize = chain
        .iter()
        .skip(1)
        .take(chain.len() - 2)
        .map(|tile| tile.count(value))
        .sum();
    Some((value, 2 + interior))
}

/// Check the locked-chain draw condition.
#[must_use]
pub fn is_blocked(chain: &Chain) -> bool {
    blocking_count(chain).is_some_and(|(_, count)| count == BLOCKING_COUNT)
}

/// Evaluate the status of a position. Empty hands are checked before the
/// blocked chain.
#[must_use]
pub fn evaluate(hands: &SeatMap<TileSet>, chain: &Chain) -> Status {
    if let Some((seat, _)) = hands.iter().find(|(_, hand)| hand.is_empty()) {
        return Status::won_by(seat);
    }
    if is_blocked(chain) {
        return Status::Draw;
    }
    Status::InProgress
}
