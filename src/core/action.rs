//! Move descriptors.
//!
//! A move is a signed integer, the same token a human types:
//! - `0`: draw a tile from stock (or pass when the stock is empty)
//! - `+n`: attach the n-th tile of the hand (1-based) to the right end
//! - `-n`: attach it to the left end
//!
//! ```
//! use dominoes::core::{End, Move};
//!
//! let mv: Move = "-3".parse().unwrap();
//! assert_eq!(mv.end(), Some(End::Left));
//! assert_eq!(mv.hand_index(), Some(2));
//!
//! assert!(Move::DRAW.is_draw());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Rejection};
use super::player::Seat;
use super::tile::Tile;

/// One of the two open ends of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

impl std::str::FromStr for End {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(End::Left),
            "R" | "r" => Ok(End::Right),
            _ => Err(DominoError::InvalidSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Left => write!(f, "L"),
            End::Right => write!(f, "R"),
        }
    }
}

/// Signed move descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub i32);

impl Move {
    /// Draw from stock, or pass if it is empty.
    pub const DRAW: Move = Move(0);

    /// Attach the tile at 1-based `position` to `end`.
    ///
    /// Positions past `i32::MAX` saturate; no hand is that large, so the
    /// engine rejects them as out of range.
    #[must_use]
    pub fn attach(position: usize, end: End) -> Self {
        let magnitude = i32::try_from(position).unwrap_or(i32::MAX);
        match end {
            End::Right => Self(magnitude),
            End::Left => Self(-magnitude),
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.0 == 0
    }

    /// The chain end this move attaches to, `None` for a draw.
    #[must_use]
    pub const fn end(self) -> Option<End> {
        match self.0 {
            0 => None,
            m if m > 0 => Some(End::Right),
            _ => Some(End::Left),
        }
    }

    /// 0-based hand index of the tile to play, `None` for a draw.
    #[must_use]
    pub fn hand_index(self) -> Option<usize> {
        (self.0 != 0).then(|| self.0.unsigned_abs() as usize - 1)
    }
}

impl std::str::FromStr for Move {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Move)
            .map_err(|_| Rejection::NotANumber.into())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An applied move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub seat: Seat,

    /// The descriptor that was applied.
    pub mv: Move,

    /// Tile that changed hands: played to the chain, or drawn from stock.
    /// `None` for a pass on an empty stock.
    pub tile: Option<Tile>,

    /// Turn number when the move was applied (starts at 1).
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_parse() {
        assert_eq!("L".parse::<End>(), Ok(End::Left));
        assert_eq!("R".parse::<End>(), Ok(End::Right));
        assert_eq!("r".parse::<End>(), Ok(End::Right));
        assert_eq!(
            "X".parse::<End>(),
            Err(DominoError::InvalidSide("X".to_string()))
        );
        assert!("".parse::<End>().is_err());
    }

    #[test]
    fn test_move_sides() {
        assert_eq!(Move(4).end(), Some(End::Right));
        assert_eq!(Move(-4).end(), Some(End::Left));
        assert_eq!(Move::DRAW.end(), None);
    }

    #[test]
    fn test_move_hand_index() {
        assert_eq!(Move(1).hand_index(), Some(0));
        assert_eq!(Move(-7).hand_index(), Some(6));
        assert_eq!(Move::DRAW.hand_index(), None);
    }

    #[test]
    fn test_move_attach() {
        assert_eq!(Move::attach(3, End::Right), Move(3));
        assert_eq!(Move::attach(3, End::Left), Move(-3));
    }

    #[test]
    fn test_move_attach_saturates() {
        assert_eq!(Move::attach(usize::MAX, End::Right), Move(i32::MAX));
        assert_eq!(Move::attach(usize::MAX, End::Left), Move(-i32::MAX));
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("+1".parse::<Move>(), Ok(Move(1)));
        assert_eq!(" -2\n".parse::<Move>(), Ok(Move(-2)));
        assert_eq!("0".parse::<Move>(), Ok(Move::DRAW));
        assert_eq!(
            "abc".parse::<Move>(),
            Err(DominoError::RejectedCommand(Rejection::NotANumber))
        );
        assert!("1.5".parse::<Move>().is_err());
    }

    #[test]
    fn test_record_serde() {
        let record = MoveRecord {
            seat: Seat::Computer,
            mv: Move(-2),
            tile: Some(Tile::new(3, 5).unwrap()),
            turn: 4,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
