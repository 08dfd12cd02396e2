//! Error types.
//!
//! Only `RejectedCommand` is part of normal play: it tells the front-end to
//! re-prompt the human. Everything else signals a caller bug or a setup that
//! cannot produce a game.

/// Why a human command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The command is not a signed integer.
    NotANumber,
    /// The index does not name a tile in hand.
    OutOfRange { hand_size: usize },
    /// The tile has no face matching the requested open end.
    IllegalMove,
    /// It is the computer's turn.
    NotYourTurn,
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "could not read a move from the command"),
            Self::OutOfRange { hand_size } => {
                write!(f, "no such piece, choose between -{hand_size} and {hand_size}")
            }
            Self::IllegalMove => write!(f, "illegal move"),
            Self::NotYourTurn => write!(f, "it is not your turn"),
            Self::GameOver => write!(f, "the game is over"),
        }
    }
}

/// Errors raised by the domino engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DominoError {
    /// Pip pair not exactly two values in `0..=6`.
    InvalidTile,
    /// Sampling more tiles than the set holds.
    InsufficientTiles { requested: usize, available: usize },
    /// End value requested from an empty set.
    EmptySet,
    /// Side token other than `L` or `R`.
    InvalidSide(String),
    /// Human command refused; re-prompt.
    RejectedCommand(Rejection),
    /// No opening double decided the game within the retry cap.
    InitializationDeadlock { attempts: u32 },
    /// Scripted position with duplicate pieces or a broken chain.
    InvalidPosition(String),
    /// Computer asked to move while it is not its turn or the game is over.
    OutOfTurn,
}

impl std::fmt::Display for DominoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTile => write!(f, "a tile needs exactly two pip values between 0 and 6"),
            Self::InsufficientTiles { requested, available } => {
                write!(f, "requested {requested} tiles, but only {available} available")
            }
            Self::EmptySet => write!(f, "the tile set is empty"),
            Self::InvalidSide(side) => write!(f, "invalid side {side:?}, expected \"L\" or \"R\""),
            Self::RejectedCommand(reason) => write!(f, "rejected command: {reason}"),
            Self::InitializationDeadlock { attempts } => {
                write!(f, "no starting double found after {attempts} deals")
            }
            Self::InvalidPosition(reason) => write!(f, "invalid position: {reason}"),
            Self::OutOfTurn => write!(f, "the computer cannot move now"),
        }
    }
}

impl std::error::Error for DominoError {}

impl From<Rejection> for DominoError {
    fn from(reason: Rejection) -> Self {
        Self::RejectedCommand(reason)
    }
}

pub type Result<T> = std::result::Result<T, DominoError>;
