//! Card containers: the deck, the two hands and the altar.
//!
//! ## Key Types
//!
//! - `Deck`: undealt cards; shuffled once per round
//! - `Hand`: one side's cards, bounded by the hand limit
//! - `Altar`: the discard pile whose top card gates legality
//!
//! The turn engine is the only mutator during a round. Together the four
//! containers always hold each of the 52 cards exactly once.

pub mod altar;
pub mod deck;
pub mod hand;

pub use altar::Altar;
pub use deck::Deck;
pub use hand::{Hand, HandOrder, DEFAULT_HAND_LIMIT};
