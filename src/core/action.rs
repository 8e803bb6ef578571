//! Actions a side can submit and the history record of accepted ones.
//!
//! The engine exposes one `submit_*` method per action; `Action` is the
//! value form used for history, replay and policy output.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::side::Side;

/// A rules-affecting action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "card", rename_all = "snake_case")]
pub enum Action {
    /// Play a card from hand onto the altar.
    Play(Card),
    /// Draw the top card of the deck.
    Draw,
    /// Pass control to the other side.
    EndTurn,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "play {card}"),
            Action::Draw => f.write_str("draw"),
            Action::EndTurn => f.write_str("end turn"),
        }
    }
}

/// Record of an accepted action for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub side: Side,
    /// What they did.
    pub action: Action,
    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}
