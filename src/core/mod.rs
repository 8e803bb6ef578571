//! Core value types: cards, sides, configuration, actions, events, errors, RNG.
//!
//! Nothing here holds game state; the zones and the turn engine build on
//! these types.

pub mod card;
pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod event;
pub mod error;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{ConfigError, RoundConfig};
pub use action::{Action, ActionRecord};
pub use event::Event;
pub use error::{EngineError, InvariantViolation, RuleViolation};
