//! Events emitted by the turn engine.
//!
//! The presentation layer never inspects engine internals to find out what
//! changed. It drains these events after each submitted action and animates
//! from them, correlating cards by their `(suit, rank)` identity.
//!
//! A single action can produce several events. Playing a last card yields
//! `CardPlayed` followed by `RoundOver`; a CPU draw that leaves it stuck
//! yields `CardDrawn` and then `TurnChanged`.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::side::Side;
use crate::zones::HandOrder;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A fresh round was dealt.
    RoundStarted { starting_side: Side, hand_size: usize },

    /// A card moved from a hand onto the altar.
    CardPlayed {
        side: Side,
        card: Card,
        new_top_card: Card,
    },

    /// A card moved from the deck into a hand.
    CardDrawn { side: Side, card: Card },

    /// Control passed to `new_side`.
    TurnChanged { new_side: Side },

    /// A side emptied its hand.
    RoundOver { winner: Side },

    /// A hand reached its limit; drawing is off until the next turn.
    HandFull { side: Side },

    /// The deck ran out.
    DeckEmpty,

    /// A hand was re-sorted for display.
    HandArranged { side: Side, order: HandOrder },

    /// The round was abandoned after an internal inconsistency.
    RoundAborted { reason: String },
}

impl Event {
    /// The winner, if this event ends the round.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Event::RoundOver { winner } => Some(*winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_winner() {
        assert_eq!(Event::RoundOver { winner: Side::Cpu }.winner(), Some(Side::Cpu));
        assert_eq!(Event::DeckEmpty.winner(), None);
    }

    #[test]
    fn test_serde_shape() {
        let card = Card::new(Suit::Spades, Rank::new(7).unwrap());
        let event = Event::CardPlayed {
            side: Side::Cpu,
            card,
            new_top_card: card,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "card_played");
        assert_eq!(json["side"], "cpu");
        assert_eq!(json["card"]["suit"], "spades");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
