//! Match configuration.

use crate::cards::Rank;
use crate::deck::DECK_SIZE;

/// Largest hand size that still leaves one card to seed the discard pile.
pub const MAX_HAND_SIZE: usize = (DECK_SIZE - 1) / 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("hand size out of range: expected 1..={max}, got {got}")]
    HandSizeOutOfRange { max: usize, got: usize },
}

/// Rules knobs for a match. Defaults are the standard game: eight cards each, eights wild.
///
/// ```
/// use eights_rs::cards::Rank;
/// use eights_rs::config::GameConfig;
///
/// let cfg = GameConfig::default().with_hand_size(5).with_seed(42);
/// assert_eq!(cfg.wild_rank, Rank::Eight);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub hand_size: usize,
    pub wild_rank: Rank,
    /// Seed for the shuffling RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_HAND_SIZE: usize = 8;

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_wild_rank(mut self, wild_rank: Rank) -> Self {
        self.wild_rank = wild_rank;
        self
    }

    /// Set a deterministic RNG seed for reproducible deals.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 || self.hand_size > MAX_HAND_SIZE {
            return Err(ConfigError::HandSizeOutOfRange {
                max: MAX_HAND_SIZE,
                got: self.hand_size,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { hand_size: Self::DEFAULT_HAND_SIZE, wild_rank: Rank::Eight, seed: None }
    }
}
