//! Arranged table positions.
//!
//! A `TableLayout` describes exactly where every card sits so a round can
//! start from a known position instead of a shuffle: puzzles, tutorials and
//! reproducing a reported situation. `TurnEngine::from_layout` checks the
//! layout holds each of the 52 cards exactly once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Side};

/// Card placement for an arranged round.
///
/// `deck` and `altar` are bottom first, so the last entries are the next
/// draw and the current top card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub player: Vec<Card>,
    pub cpu: Vec<Card>,
    pub altar: Vec<Card>,
    pub deck: Vec<Card>,
    pub to_move: Side,
}

impl TableLayout {
    /// Place the given hands and altar; every other card goes to the deck in
    /// `Card::full_set` order. The player moves first.
    ///
    /// ```
    /// use altar_engine::core::{Card, Rank, Suit};
    /// use altar_engine::rules::TableLayout;
    ///
    /// let c = |s, r| Card::new(s, Rank::new(r).unwrap());
    /// let layout = TableLayout::new(&[c(Suit::Clubs, 5)], &[c(Suit::Spades, 7)], &[c(Suit::Clubs, 2)]);
    /// assert_eq!(layout.deck.len(), 49);
    /// ```
    #[must_use]
    pub fn new(player: &[Card], cpu: &[Card], altar: &[Card]) -> Self {
        let placed: FxHashSet<Card> = player.iter().chain(cpu).chain(altar).copied().collect();
        let deck = Card::full_set().filter(|c| !placed.contains(c)).collect();

        Self {
            player: player.to_vec(),
            cpu: cpu.to_vec(),
            altar: altar.to_vec(),
            deck,
            to_move: Side::Player,
        }
    }

    /// Set the side that acts first.
    #[must_use]
    pub fn to_move(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    /// Keep only the top `size` deck cards; the rest are tucked beneath the
    /// altar so the top card is unchanged.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        let keep_from = self.deck.len().saturating_sub(size);
        let mut altar: Vec<Card> = self.deck.drain(..keep_from).collect();
        altar.append(&mut self.altar);
        self.altar = altar;
        self
    }

    /// Shorthand for `with_deck_size(0)`.
    #[must_use]
    pub fn with_empty_deck(self) -> Self {
        self.with_deck_size(0)
    }
}
