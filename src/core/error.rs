//! Error taxonomy.
//!
//! - `RuleViolation`: a submitted action is not allowed right now. The engine
//!   state is untouched and the caller may retry with a different action.
//!   Display strings are written for the player.
//! - `InvariantViolation`: the engine's own bookkeeping is inconsistent.
//!   The round is aborted when one of these surfaces through the engine.
//! - `EngineError`: everything a `TurnEngine` call can return.
//!
//! Running out of deck or filling a hand during play is not an error; those
//! are reported as events.

use thiserror::Error;

use super::card::Card;
use super::config::ConfigError;
use super::side::Side;

/// A recoverable, player-facing rejection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("It's not your turn!")]
    WrongTurn { side: Side },

    #[error("The round is over")]
    RoundOver,

    #[error("The round was aborted; start a new round")]
    RoundAborted,

    #[error("Card must match the suit or rank of the last card")]
    IllegalCard { card: Card, top: Card },

    #[error("{card} is not in your hand")]
    CardNotInHand { card: Card },

    #[error("You can't draw after playing a card, but you can play more cards or end your turn.")]
    DrawAfterPlay,

    #[error("Your hand is full ({limit} cards)")]
    HandFull { limit: usize },

    #[error("Deck is empty!")]
    DeckEmpty,

    #[error("You can't draw more than {limit} cards this turn")]
    DrawLimitReached { limit: u32 },
}

/// A broken internal invariant. Never expected while the engine is the
/// sole mutator of its zones.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("deck initialized while still holding {remaining} cards")]
    DeckNotEmpty { remaining: usize },

    #[error("hand already holds its limit of {limit} cards")]
    HandFull { limit: usize },

    #[error("card {card} not found in hand")]
    CardNotFound { card: Card },

    #[error("card count mismatch: expected {expected}, found {actual}")]
    CardCountMismatch { expected: usize, actual: usize },

    #[error("card {card} appears more than once")]
    DuplicateCard { card: Card },

    #[error("{side} hand is empty at round start")]
    EmptyHand { side: Side },

    #[error("opponent policy did not yield the turn after {steps} steps")]
    PolicyStalled { steps: usize },
}

/// Any failure surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// The rule violation, if this is a recoverable rejection.
    #[must_use]
    pub fn as_rule(&self) -> Option<&RuleViolation> {
        match self {
            EngineError::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    /// True if this error aborted (or would abort) the round.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Invariant(_))
    }
}
