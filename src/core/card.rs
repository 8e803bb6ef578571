//! Card identity: suit and rank.
//!
//! A `Card` is an immutable `(suit, rank)` value. A standard deck holds
//! exactly one card for each of the 52 combinations, so the pair itself is
//! the card's identity. Presentation layers correlate their sprites with
//! engine cards through the string keys produced here.
//!
//! ## Keys
//!
//! ```
//! use altar_engine::core::{Card, Rank, Suit};
//!
//! let card = Card::new(Suit::Clubs, Rank::new(5).unwrap());
//! assert_eq!(card.to_string(), "clubs-5");
//! assert_eq!(card.asset_key(), "card-clubs-5");
//!
//! let parsed: Card = "card-clubs-5".parse().unwrap();
//! assert_eq!(parsed, card);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Lowercase name used in card keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    /// Position when a hand is arranged by suit: hearts, diamonds, clubs, spades.
    #[must_use]
    pub const fn arrangement_order(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseCardError::UnknownSuit(s.to_string()))
    }
}

/// Card rank in `1..=13` (Ace = 1, Jack = 11, Queen = 12, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Lowest valid rank value.
    pub const MIN: u8 = 1;
    /// Highest valid rank value.
    pub const MAX: u8 = 13;

    /// Create a rank, returning `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(ParseCardError::RankOutOfRange(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card.
///
/// Ordering is suit-major then rank; it only exists so cards can live in
/// sorted collections and carries no game meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Number of distinct cards in a full deck.
    pub const DECK_SIZE: usize = 52;

    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The asset key the presentation layer uses for this card's face.
    #[must_use]
    pub fn asset_key(self) -> String {
        format!("card-{self}")
    }

    /// True if the two cards share a suit or a rank.
    #[must_use]
    pub fn matches(self, other: Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }

    /// All 52 cards, suit by suit, Ace to King.
    pub fn full_set() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `suit-rank` or `card-suit-rank`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix("card-").unwrap_or(s);
        let (suit, rank) = key
            .split_once('-')
            .ok_or_else(|| ParseCardError::Malformed(s.to_string()))?;

        let suit: Suit = suit.parse()?;
        let rank: u8 = rank
            .parse()
            .map_err(|_| ParseCardError::Malformed(s.to_string()))?;

        Ok(Card::new(suit, Rank::try_from(rank)?))
    }
}

/// Failure to parse a card key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("malformed card key: {0}")]
    Malformed(String),
    #[error("unknown suit: {0}")]
    UnknownSuit(String),
    #[error("rank out of range (got {0}, expected 1..=13)")]
    RankOutOfRange(u8),
}
