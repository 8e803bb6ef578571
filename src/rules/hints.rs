//! Guidance messages derived from engine state.
//!
//! The presentation layer shows these to the human; they are computed from
//! the hand, the altar and the turn flags, never from rendered objects.

use serde::{Deserialize, Serialize};

/// What a side should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// Fresh turn with something to do.
    YourTurn,
    /// The other side is acting.
    NotYourTurn,
    /// Nothing playable, but the deck can still be drawn from.
    DrawOrEndTurn,
    /// Nothing playable and no draw available.
    NoValidMovesEndTurn,
}

impl Hint {
    /// Text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Hint::YourTurn => "Your Turn - Play a card or draw",
            Hint::NotYourTurn => "It's not your turn!",
            Hint::DrawOrEndTurn => "No matching cards. Draw from the deck or end your turn.",
            Hint::NoValidMovesEndTurn => "No valid moves left. End your turn.",
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
