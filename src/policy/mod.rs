//! Opponent policies: how the scripted side chooses its next action.
//!
//! A policy sees only a `PolicyView` (its own hand, the altar's top card and
//! whether drawing is currently allowed) and returns a `Decision`. Policies
//! are synchronous and hold no memory between calls, so the same view
//! always yields the same decision. Any "thinking" pause belongs to the
//! presentation layer and wraps the call; it never changes the answer.
//!
//! ## Key Types
//!
//! - `OpponentPolicy`: the decision trait
//! - `GreedyOpponent`: suit match first, then rank match, else draw, else pass

mod greedy;

pub use greedy::GreedyOpponent;

use serde::{Deserialize, Serialize};

use crate::core::{Action, Card};

/// The information a policy decides from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyView<'a> {
    /// The deciding side's hand, in display order.
    pub hand: &'a [Card],
    /// Top card of the altar, `None` before the first play of a round.
    pub top: Option<Card>,
    /// Whether the engine would accept a draw right now.
    pub can_draw: bool,
}

/// A policy's choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Play(Card),
    Draw,
    EndTurn,
}

impl From<Decision> for Action {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Play(card) => Action::Play(card),
            Decision::Draw => Action::Draw,
            Decision::EndTurn => Action::EndTurn,
        }
    }
}

/// Chooses the next action for a scripted side.
pub trait OpponentPolicy {
    /// Decide from the given view. Must be deterministic in `view`.
    fn decide(&self, view: &PolicyView<'_>) -> Decision;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for &P {
    fn decide(&self, view: &PolicyView<'_>) -> Decision {
        (**self).decide(view)
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn decide(&self, view: &PolicyView<'_>) -> Decision {
        (**self).decide(view)
    }
}
