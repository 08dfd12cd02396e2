//! Game configuration.
//!
//! The rules themselves are fixed (double-six set, 7-tile hands). What a
//! caller picks is the deal seed and how many redeals to tolerate before
//! giving up on finding an opening double.

/// Tiles dealt to each hand.
pub const HAND_SIZE: usize = 7;

/// Tiles in a full double-six set.
pub const FULL_SET_SIZE: usize = 28;

/// Face appearances of one value that block the game when both ends show it.
pub const BLOCKING_COUNT: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the deal.
    pub seed: u64,

    /// Deals to try before failing with `InitializationDeadlock`.
    pub max_deal_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_deal_attempts: 64,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the redeal cap.
    #[must_use]
    pub fn with_max_deal_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 deal");
        self.max_deal_attempts = attempts;
        self
    }
}
