//! A side's hand.
//!
//! Rules treat a hand as a set; display keeps insertion order, which the
//! player can re-sort with `arrange`. The hand refuses to grow past its
//! limit. The turn engine checks the limit before drawing, so a refused
//! `add` means the engine's own bookkeeping is wrong.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, InvariantViolation};

/// Default maximum hand size.
pub const DEFAULT_HAND_LIMIT: usize = 10;

/// Display orderings a player can apply to their hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandOrder {
    /// Hearts, diamonds, clubs, spades; ranks keep their relative order.
    BySuit,
    /// Ace up to King; suits keep their relative order.
    ByRank,
}

/// Cards held by one side, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// SmallVec keeps the default 10-card hand inline.
    cards: SmallVec<[Card; DEFAULT_HAND_LIMIT]>,
    limit: usize,
}

impl Default for Hand {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HAND_LIMIT)
    }
}

impl Hand {
    /// Create an empty hand with the default limit of 10.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty hand holding at most `limit` cards.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            limit,
        }
    }

    /// Append a card.
    pub fn add(&mut self, card: Card) -> Result<(), InvariantViolation> {
        if self.is_full() {
            return Err(InvariantViolation::HandFull { limit: self.limit });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the first matching card, preserving the order of the rest.
    pub fn remove(&mut self, card: Card) -> Result<Card, InvariantViolation> {
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(InvariantViolation::CardNotFound { card })?;
        Ok(self.cards.remove(idx))
    }

    /// Stable-sort the hand for display.
    pub fn arrange(&mut self, order: HandOrder) {
        match order {
            HandOrder::BySuit => self.cards.sort_by_key(|c| c.suit.arrangement_order()),
            HandOrder::ByRank => self.cards.sort_by_key(|c| c.rank),
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.limit
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
