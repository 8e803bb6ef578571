//! Win counters that survive across rounds.
//!
//! A `ScoreTracker` is owned by whoever owns the session (see
//! `crate::session::Session`). The engine never touches it; the owner records
//! a win when it sees `Event::RoundOver`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Side, SideMap};

/// Per-side round wins.
///
/// ```
/// use altar_engine::core::Side;
/// use altar_engine::score::ScoreTracker;
///
/// let mut scores = ScoreTracker::new();
/// scores.record_win(Side::Player);
/// scores.record_win(Side::Player);
/// scores.record_win(Side::Cpu);
/// assert_eq!((scores.player_wins(), scores.cpu_wins()), (2, 1));
///
/// scores.reset();
/// assert_eq!(scores.total(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    wins: SideMap<u32>,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exactly one win for `side`.
    pub fn record_win(&mut self, side: Side) {
        let wins = &mut self.wins[side];
        *wins = wins.saturating_add(1);
        info!(
            winner = %side,
            player = self.wins[Side::Player],
            cpu = self.wins[Side::Cpu],
            "win recorded"
        );
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        self.wins = SideMap::with_default();
        info!("scores reset");
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side]
    }

    #[must_use]
    pub fn player_wins(&self) -> u32 {
        self.wins[Side::Player]
    }

    #[must_use]
    pub fn cpu_wins(&self) -> u32 {
        self.wins[Side::Cpu]
    }

    /// Rounds won by either side.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player_wins() + self.cpu_wins()
    }

    /// The side with more wins, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.player_wins().cmp(&self.cpu_wins()) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Cpu),
            std::cmp::Ordering::Equal => None,
        }
    }
}
