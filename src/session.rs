//! The session root: one engine, one scoreboard and the CPU's policy.
//!
//! `Session` is what a presentation layer holds. Human actions go through
//! the forwarding `submit_*` methods, the CPU's turn is driven by
//! `run_cpu_turn`, and every `Event::RoundOver` the engine emits is counted
//! exactly once on the `ScoreTracker`.
//!
//! ```
//! use altar_engine::core::{RoundConfig, Side};
//! use altar_engine::session::Session;
//!
//! let mut session = Session::new(RoundConfig::default().with_seed(3)).unwrap();
//! let card = session.engine().hand(Side::Player).cards()[0];
//! session.submit_play(Side::Player, card).unwrap();
//! session.submit_end_turn(Side::Player).unwrap();
//!
//! session.run_cpu_turn().unwrap();
//! assert!(session.engine().state().active_side() != Some(Side::Cpu));
//! ```

use tracing::debug;

use crate::core::{Action, Card, EngineError, Event, InvariantViolation, RoundConfig, Side};
use crate::policy::{GreedyOpponent, OpponentPolicy};
use crate::rules::{TableLayout, TurnEngine};
use crate::score::ScoreTracker;
use crate::zones::HandOrder;

/// Upper bound on policy steps within one turn. A side can draw at most the
/// whole deck and play at most every card, so a sound policy never gets close.
const MAX_TURN_STEPS: usize = Card::DECK_SIZE * 2 + 1;

/// An engine plus the state that outlives a single round.
#[derive(Clone, Debug)]
pub struct Session<P: OpponentPolicy = GreedyOpponent> {
    engine: TurnEngine,
    scores: ScoreTracker,
    policy: P,
}

impl Session<GreedyOpponent> {
    /// Start a session against the greedy opponent and deal the first round.
    pub fn new(config: RoundConfig) -> Result<Self, EngineError> {
        Self::with_policy(config, GreedyOpponent)
    }
}

impl<P: OpponentPolicy> Session<P> {
    /// Start a session against a custom opponent policy.
    pub fn with_policy(config: RoundConfig, policy: P) -> Result<Self, EngineError> {
        Ok(Self {
            engine: TurnEngine::new(config)?,
            scores: ScoreTracker::new(),
            policy,
        })
    }

    /// Start a session positioned at an arranged layout.
    pub fn from_layout(config: RoundConfig, layout: TableLayout, policy: P) -> Result<Self, EngineError> {
        Ok(Self {
            engine: TurnEngine::from_layout(config, layout)?,
            scores: ScoreTracker::new(),
            policy,
        })
    }

    // === Round lifecycle ===

    /// Deal a new round with `hand_size` cards per side. Scores are kept.
    pub fn start_round(&mut self, hand_size: usize) -> Result<Event, EngineError> {
        self.engine.start_round(hand_size)
    }

    /// Deal a new round with the configured hand size.
    pub fn restart_round(&mut self) -> Result<Event, EngineError> {
        let hand_size = self.engine.config().hand_size;
        self.start_round(hand_size)
    }

    // === Human actions ===

    pub fn submit_play(&mut self, side: Side, card: Card) -> Result<Event, EngineError> {
        self.apply(side, Action::Play(card))
    }

    pub fn submit_draw(&mut self, side: Side) -> Result<Event, EngineError> {
        self.apply(side, Action::Draw)
    }

    pub fn submit_end_turn(&mut self, side: Side) -> Result<Event, EngineError> {
        self.apply(side, Action::EndTurn)
    }

    pub fn arrange_hand(&mut self, side: Side, order: HandOrder) -> Result<Event, EngineError> {
        self.engine.arrange_hand(side, order)
    }

    /// Submit any action, counting a win if it ends the round.
    pub fn apply(&mut self, side: Side, action: Action) -> Result<Event, EngineError> {
        let seen = self.engine.pending_events().len();
        let result = self.engine.apply(side, action);
        count_wins(&self.engine, &mut self.scores, seen);
        result
    }

    // === Scripted turns ===

    /// Let the session's policy act for the CPU until the turn passes or the
    /// round ends. Returns the primary event of every accepted step.
    ///
    /// Does nothing when it is not the CPU's turn.
    pub fn run_cpu_turn(&mut self) -> Result<Vec<Event>, EngineError> {
        let Self { engine, scores, policy } = self;
        run_turn(engine, scores, &*policy, Side::Cpu)
    }

    /// Let `policy` act for `side` until the turn passes or the round ends.
    ///
    /// Useful for autoplay and for simulating the human side in tests.
    pub fn run_turn_with<Q: OpponentPolicy>(
        &mut self,
        side: Side,
        policy: &Q,
    ) -> Result<Vec<Event>, EngineError> {
        run_turn(&mut self.engine, &mut self.scores, policy, side)
    }

    // === Scores ===

    #[must_use]
    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// Zero both win counters. The current round is untouched.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Take every event queued by the engine, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.engine.drain_events()
    }
}

fn run_turn<Q: OpponentPolicy + ?Sized>(
    engine: &mut TurnEngine,
    scores: &mut ScoreTracker,
    policy: &Q,
    side: Side,
) -> Result<Vec<Event>, EngineError> {
    let mut produced = Vec::new();

    for _ in 0..MAX_TURN_STEPS {
        if engine.state().active_side() != Some(side) {
            debug!(side = %side, steps = produced.len(), "scripted turn finished");
            return Ok(produced);
        }

        let decision = policy.decide(&engine.policy_view(side));
        let seen = engine.pending_events().len();
        let result = engine.apply(side, decision.into());
        count_wins(engine, scores, seen);
        produced.push(result?);
    }

    if engine.state().active_side() != Some(side) {
        return Ok(produced);
    }

    Err(engine.abort(InvariantViolation::PolicyStalled {
        steps: MAX_TURN_STEPS,
    }))
}

/// Record a win for every `RoundOver` queued since index `seen`.
fn count_wins(engine: &TurnEngine, scores: &mut ScoreTracker, seen: usize) {
    for event in &engine.pending_events()[seen..] {
        if let Some(winner) = event.winner() {
            scores.record_win(winner);
        }
    }
}
