//! Game rules: move legality, the turn engine and player hints.
//!
//! - `moves`: pure legality checks shared by every caller
//! - `engine`: `TurnEngine`, the state machine that owns a round
//! - `hints`: guidance derived from engine state
//! - `layout`: arranged starting positions

pub mod engine;
pub mod hints;
pub mod layout;
pub mod moves;

pub use engine::{TurnEngine, TurnFlags, TurnState};
pub use hints::Hint;
pub use layout::TableLayout;
pub use moves::{
    first_rank_match, first_suit_match, has_any_legal_move, is_legal, legal_cards, legal_set,
};
