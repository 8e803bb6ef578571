//! Round configuration.
//!
//! A `RoundConfig` fixes the dealing and drawing limits for every round an
//! engine plays. It can be built in code with the `with_*` setters or
//! deserialized from a host's settings file; missing fields take the
//! defaults of the classic table (4-card deal, 10-card hand limit).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;
use super::side::Side;

/// Configuration applied to each round.
///
/// ```
/// use altar_engine::core::{RoundConfig, Side};
///
/// let config = RoundConfig::default()
///     .with_hand_size(5)
///     .with_max_draws_per_turn(1)
///     .with_seed(42);
///
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.hand_limit, 10);
/// assert_eq!(config.starting_side, Side::Player);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Cards dealt to each side at round start.
    pub hand_size: usize,

    /// Maximum cards a hand may hold. Drawing is refused at this size.
    pub hand_limit: usize,

    /// Draws allowed per turn before the first play. `None` for unlimited.
    pub max_draws_per_turn: Option<u32>,

    /// Side that acts first in every round.
    pub starting_side: Side,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: 4,
            hand_limit: 10,
            max_draws_per_turn: None,
            starting_side: Side::Player,
            seed: None,
        }
    }
}

impl RoundConfig {
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, hand_limit: usize) -> Self {
        self.hand_limit = hand_limit;
        self
    }

    /// Cap the number of draws per turn (the "draw once" table rule is `1`).
    #[must_use]
    pub fn with_max_draws_per_turn(mut self, max: u32) -> Self {
        self.max_draws_per_turn = Some(max);
        self
    }

    #[must_use]
    pub fn with_starting_side(mut self, side: Side) -> Self {
        self.starting_side = side;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against a 52-card deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_limit == 0 {
            return Err(ConfigError::ZeroHandLimit);
        }
        validate_hand_size(self.hand_size, self.hand_limit)
    }
}

/// Check a deal size against the hand limit and the deck.
pub(crate) fn validate_hand_size(hand_size: usize, hand_limit: usize) -> Result<(), ConfigError> {
    if hand_size == 0 {
        return Err(ConfigError::ZeroHandSize);
    }
    if hand_size > hand_limit {
        return Err(ConfigError::HandSizeOverLimit {
            hand_size,
            hand_limit,
        });
    }
    if hand_size * 2 > Card::DECK_SIZE {
        return Err(ConfigError::DealExceedsDeck { hand_size });
    }
    Ok(())
}

/// Invalid round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand_size must be > 0")]
    ZeroHandSize,
    #[error("hand_limit must be > 0")]
    ZeroHandLimit,
    #[error("hand_size {hand_size} exceeds hand_limit {hand_limit}")]
    HandSizeOverLimit { hand_size: usize, hand_limit: usize },
    #[error("dealing {hand_size} cards to each side exceeds the 52-card deck")]
    DealExceedsDeck { hand_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.hand_limit, 10);
        assert_eq!(config.max_draws_per_turn, None);
        assert_eq!(config.starting_side, Side::Player);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            RoundConfig::default().with_hand_size(0).validate(),
            Err(ConfigError::ZeroHandSize)
        );
        assert_eq!(
            RoundConfig::default().with_hand_limit(0).validate(),
            Err(ConfigError::ZeroHandLimit)
        );
        assert_eq!(
            RoundConfig::default().with_hand_size(11).validate(),
            Err(ConfigError::HandSizeOverLimit {
                hand_size: 11,
                hand_limit: 10
            })
        );
        assert_eq!(
            RoundConfig::default()
                .with_hand_limit(40)
                .with_hand_size(27)
                .validate(),
            Err(ConfigError::DealExceedsDeck { hand_size: 27 })
        );
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: RoundConfig =
            serde_json::from_str(r#"{"hand_size": 6, "starting_side": "cpu"}"#).unwrap();
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.hand_limit, 10);
        assert_eq!(config.starting_side, Side::Cpu);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = RoundConfig::default().with_max_draws_per_turn(1).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
