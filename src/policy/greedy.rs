//! Greedy opponent.

use tracing::trace;

use super::{Decision, OpponentPolicy, PolicyView};
use crate::rules::{first_rank_match, first_suit_match, has_any_legal_move, is_legal};

/// Plays the first suit match in hand order, else the first rank match.
/// With nothing playable it draws when allowed and otherwise ends the turn.
///
/// Called repeatedly, this empties every legal card it can in one turn.
///
/// ```
/// use altar_engine::core::{Card, Rank, Suit};
/// use altar_engine::policy::{Decision, GreedyOpponent, OpponentPolicy, PolicyView};
///
/// let c = |s, r| Card::new(s, Rank::new(r).unwrap());
/// let hand = [c(Suit::Hearts, 7), c(Suit::Spades, 7)];
/// let view = PolicyView { hand: &hand, top: Some(c(Suit::Spades, 3)), can_draw: true };
///
/// assert_eq!(GreedyOpponent.decide(&view), Decision::Play(c(Suit::Spades, 7)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn decide(&self, view: &PolicyView<'_>) -> Decision {
        let decision = match view.top {
            None => view.hand.first().copied().map(Decision::Play),
            Some(top) => first_suit_match(view.hand, top)
                .or_else(|| first_rank_match(view.hand, top))
                .map(Decision::Play),
        };

        let decision = decision.unwrap_or(if view.can_draw {
            Decision::Draw
        } else {
            Decision::EndTurn
        });

        debug_assert!(match decision {
            Decision::Play(card) => is_legal(card, view.top),
            _ => !has_any_legal_move(view.hand, view.top),
        });

        trace!(?decision, hand = view.hand.len(), "greedy decision");
        decision
    }
}
