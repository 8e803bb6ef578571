//! Move legality: the single authority on which cards may be played.
//!
//! Both the engine's validation of submitted plays and the opponent policy
//! call into this module; nothing else compares suits or ranks.

use rustc_hash::FxHashSet;

use crate::core::Card;

/// Can `card` be played onto an altar whose top is `top`?
///
/// Any card may open an empty altar. Otherwise the card must share the top
/// card's suit or rank.
///
/// ```
/// use altar_engine::core::{Card, Rank, Suit};
/// use altar_engine::rules::is_legal;
///
/// let top = Card::new(Suit::Clubs, Rank::new(2).unwrap());
/// assert!(is_legal(Card::new(Suit::Clubs, Rank::new(5).unwrap()), Some(top)));
/// assert!(!is_legal(Card::new(Suit::Hearts, Rank::new(9).unwrap()), Some(top)));
/// assert!(is_legal(Card::new(Suit::Hearts, Rank::new(9).unwrap()), None));
/// ```
#[must_use]
pub fn is_legal(card: Card, top: Option<Card>) -> bool {
    match top {
        None => true,
        Some(top) => card.matches(top),
    }
}

/// Does any card in `hand` have a legal play?
///
/// An empty hand never does.
#[must_use]
pub fn has_any_legal_move(hand: &[Card], top: Option<Card>) -> bool {
    hand.iter().any(|&card| is_legal(card, top))
}

/// Iterate the legal cards of `hand`, in hand order.
pub fn legal_cards(hand: &[Card], top: Option<Card>) -> impl Iterator<Item = Card> + '_ {
    hand.iter().copied().filter(move |&card| is_legal(card, top))
}

/// First card in `hand` sharing `top`'s suit.
#[must_use]
pub fn first_suit_match(hand: &[Card], top: Card) -> Option<Card> {
    hand.iter().copied().find(|card| card.suit == top.suit)
}

/// First card in `hand` sharing `top`'s rank.
#[must_use]
pub fn first_rank_match(hand: &[Card], top: Card) -> Option<Card> {
    hand.iter().copied().find(|card| card.rank == top.rank)
}

/// The legal cards of `hand` as a set.
#[must_use]
pub fn legal_set(hand: &[Card], top: Option<Card>) -> FxHashSet<Card> {
    legal_cards(hand, top).collect()
}
