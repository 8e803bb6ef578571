//! The altar: the shared discard pile.
//!
//! Only the most recently played card matters to the rules. The full stack
//! is kept for display and accounting, in an `im::Vector` so cloning a
//! round is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Played cards, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Altar {
    stack: Vector<Card>,
}

impl Altar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top.
    pub fn play(&mut self, card: Card) {
        self.stack.push_back(card);
    }

    /// The card legality is checked against. `None` before the first play.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.stack.back().copied()
    }

    /// Clear the stack for a new round.
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Played cards, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.stack.iter().copied()
    }
}
