//! The draw pile.
//!
//! The deck is an ordered sequence of cards not yet dealt; the top is the
//! end of the vector. It starts each round full and shuffled, shrinks by one
//! per draw and may run dry, at which point `draw` returns `None`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Card, GameRng, InvariantViolation};

/// Undealt cards, top of the deck last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck. Call `initialize` before dealing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from explicit cards, top last.
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Fill the deck with all 52 cards, in suit-then-rank order.
    ///
    /// Fails if the deck still holds cards; callers `clear` between rounds.
    pub fn initialize(&mut self) -> Result<(), InvariantViolation> {
        if !self.cards.is_empty() {
            return Err(InvariantViolation::DeckNotEmpty {
                remaining: self.cards.len(),
            });
        }

        self.cards.extend(Card::full_set());
        debug!(cards = self.cards.len(), "deck initialized");
        Ok(())
    }

    /// Put the deck in a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` when exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Drop every remaining card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
