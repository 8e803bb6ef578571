//! # altar-engine
//!
//! Rules core for a two-sided shedding card game played against a scripted
//! opponent on a single table.
//!
//! Each side is dealt a few cards from a shuffled 52-card deck. On its turn a
//! side plays any number of cards that match the suit or rank of the altar's
//! top card, or draws before its first play, then ends the turn. The first
//! side to empty its hand wins the round.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: The deck, both hands and the altar are
//!    owned by `TurnEngine` and together always hold each card exactly once.
//!    A presentation layer renders from events and queries, never from its
//!    own copies.
//!
//! 2. **Atomic Actions**: Every `submit_*` call either applies completely or
//!    returns a `RuleViolation` with nothing changed.
//!
//! 3. **Deterministic**: Shuffles come from a seedable `GameRng` and the
//!    opponent policy is a pure function of what it sees, so a seed plus an
//!    action history reproduces a round exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, sides, configuration, actions, events, errors, RNG
//! - `zones`: Deck, hands and altar
//! - `rules`: Move legality, the turn engine, hints and arranged layouts
//! - `policy`: The opponent policy trait and the greedy opponent
//! - `score`: Win counters across rounds
//! - `session`: Engine, scores and opponent policy under one owner
//!
//! ## Example
//!
//! ```
//! use altar_engine::{RoundConfig, Session, Side};
//!
//! let mut session = Session::new(RoundConfig::default().with_seed(11)).unwrap();
//!
//! let legal = session.engine().legal_moves(Side::Player);
//! assert_eq!(legal.len(), 4); // empty altar: everything is playable
//!
//! let card = session.engine().hand(Side::Player).cards()[0];
//! session.submit_play(Side::Player, card).unwrap();
//! session.submit_end_turn(Side::Player).unwrap();
//! session.run_cpu_turn().unwrap();
//!
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod core;
pub mod policy;
pub mod rules;
pub mod score;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, ConfigError, EngineError, Event, GameRng,
    InvariantViolation, Rank, RoundConfig, RuleViolation, Side, SideMap, Suit,
};

pub use crate::zones::{Altar, Deck, Hand, HandOrder};

pub use crate::rules::{Hint, TableLayout, TurnEngine, TurnFlags, TurnState};

pub use crate::policy::{Decision, GreedyOpponent, OpponentPolicy, PolicyView};

pub use crate::score::ScoreTracker;

pub use crate::session::Session;
