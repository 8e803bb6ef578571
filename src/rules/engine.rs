//! The turn engine: the state machine that owns one round at a time.
//!
//! `TurnEngine` validates every submitted action against the current turn,
//! the per-turn flags and the move rules, mutates the deck, hands and altar,
//! and queues the resulting events for the presentation layer.
//!
//! ## States
//!
//! - `PlayerTurn` / `CpuTurn`: one side may act
//! - `RoundOver { winner }`: a side emptied its hand; nothing is accepted
//! - `Aborted`: an internal invariant broke; nothing is accepted
//!
//! Only `start_round` leaves a terminal state.
//!
//! ## Actions
//!
//! Within a turn a side may draw any number of times (subject to the hand
//! limit, the deck and `max_draws_per_turn`) until it plays its first card,
//! then play any number of legal cards, then end the turn. The CPU's turn
//! ends automatically once it is stuck; the human always ends explicitly.
//!
//! ## Usage
//!
//! ```
//! use altar_engine::core::{RoundConfig, Side};
//! use altar_engine::rules::{TurnEngine, TurnState};
//!
//! let mut engine = TurnEngine::new(RoundConfig::default().with_seed(42)).unwrap();
//! assert_eq!(engine.state(), TurnState::PlayerTurn);
//! assert_eq!(engine.deck_len(), 44);
//!
//! // Any card opens an empty altar.
//! let card = engine.hand(Side::Player).cards()[0];
//! engine.submit_play(Side::Player, card).unwrap();
//! assert_eq!(engine.top_card(), Some(card));
//! ```
//!
//! Actions are atomic: a rejected action leaves the engine exactly as it was.
//! Whether an animation is still running is the presentation layer's
//! concern; the engine alone decides legality.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::hints::Hint;
use super::layout::TableLayout;
use super::moves::{has_any_legal_move, is_legal, legal_set};
use crate::core::config::validate_hand_size;
use crate::core::{
    Action, ActionRecord, Card, EngineError, Event, GameRng, InvariantViolation, RoundConfig,
    RuleViolation, Side, SideMap,
};
use crate::policy::PolicyView;
use crate::zones::{Altar, Deck, Hand, HandOrder};

/// Whose turn it is, or how the round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnState {
    PlayerTurn,
    CpuTurn,
    RoundOver { winner: Side },
    Aborted,
}

impl TurnState {
    /// The state in which `side` acts.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => TurnState::PlayerTurn,
            Side::Cpu => TurnState::CpuTurn,
        }
    }

    /// The side allowed to act, if any.
    #[must_use]
    pub const fn active_side(self) -> Option<Side> {
        match self {
            TurnState::PlayerTurn => Some(Side::Player),
            TurnState::CpuTurn => Some(Side::Cpu),
            TurnState::RoundOver { .. } | TurnState::Aborted => None,
        }
    }

    /// True once no further actions are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.active_side().is_none()
    }
}

/// Per-side flags for the current turn. Cleared on every turn change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnFlags {
    /// At least one card drawn this turn.
    pub has_drawn: bool,
    /// At least one card played this turn. Drawing is closed once set.
    pub has_played: bool,
    /// Cards drawn this turn.
    pub draws: u32,
}

/// Orchestrates one round: turn order, action validation and zone mutation.
///
/// Cloning is cheap (the altar and history are persistent vectors), so a
/// caller can explore "what if" lines on a copy.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: RoundConfig,
    rng: GameRng,
    deck: Deck,
    hands: SideMap<Hand>,
    altar: Altar,
    state: TurnState,
    flags: SideMap<TurnFlags>,
    turn_number: u32,
    history: Vector<ActionRecord>,
    events: Vec<Event>,
}

impl TurnEngine {
    /// Create an engine and deal the first round with the configured hand size.
    pub fn new(config: RoundConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let limit = config.hand_limit;
        let mut engine = Self {
            rng,
            deck: Deck::new(),
            hands: SideMap::new(|_| Hand::with_limit(limit)),
            altar: Altar::new(),
            state: TurnState::turn_of(config.starting_side),
            flags: SideMap::with_default(),
            turn_number: 1,
            history: Vector::new(),
            events: Vec::new(),
            config,
        };

        engine.start_round(engine.config.hand_size)?;
        Ok(engine)
    }

    /// Create an engine positioned at an arranged layout instead of a deal.
    ///
    /// The layout must hold each of the 52 cards exactly once, respect the
    /// hand limit and give both sides at least one card. An empty hand means
    /// the round is already over, so it is not a playable position. Later
    /// `start_round` calls deal normally.
    pub fn from_layout(config: RoundConfig, layout: TableLayout) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let limit = config.hand_limit;
        let mut hands = SideMap::new(|_| Hand::with_limit(limit));
        for (side, cards) in [(Side::Player, &layout.player), (Side::Cpu, &layout.cpu)] {
            if cards.is_empty() {
                return Err(InvariantViolation::EmptyHand { side }.into());
            }
            for &card in cards {
                hands[side].add(card)?;
            }
        }

        let mut altar = Altar::new();
        for &card in &layout.altar {
            altar.play(card);
        }

        let engine = Self {
            config,
            rng,
            deck: Deck::from_cards(layout.deck),
            hands,
            altar,
            state: TurnState::turn_of(layout.to_move),
            flags: SideMap::with_default(),
            turn_number: 1,
            history: Vector::new(),
            events: Vec::new(),
        };
        engine.check_conservation()?;

        debug!(to_move = %layout.to_move, deck = engine.deck.len(), "arranged round loaded");
        Ok(engine)
    }

    /// Reset the deck, altar, hands and turn state, then deal `hand_size`
    /// cards to each side (player first).
    ///
    /// Queues `RoundStarted`, then `HandFull` for each hand dealt up to the
    /// limit.
    ///
    /// Each round shuffles with a fresh fork of the engine's RNG, so a seeded
    /// engine replays the same sequence of deals.
    pub fn start_round(&mut self, hand_size: usize) -> Result<Event, EngineError> {
        validate_hand_size(hand_size, self.config.hand_limit)?;

        let limit = self.config.hand_limit;
        self.deck.clear();
        self.altar.reset();
        self.hands = SideMap::new(|_| Hand::with_limit(limit));
        self.flags = SideMap::with_default();
        self.history = Vector::new();
        self.turn_number = 1;
        self.state = TurnState::turn_of(self.config.starting_side);

        if let Err(violation) = self.deck.initialize() {
            return Err(self.abort(violation));
        }
        let mut round_rng = self.rng.fork();
        self.deck.shuffle(&mut round_rng);

        for side in Side::BOTH {
            for _ in 0..hand_size {
                let Some(card) = self.deck.draw() else {
                    return Err(self.abort(InvariantViolation::CardCountMismatch {
                        expected: Card::DECK_SIZE,
                        actual: self.card_count(),
                    }));
                };
                if let Err(violation) = self.hands[side].add(card) {
                    return Err(self.abort(violation));
                }
            }
        }

        if let Err(violation) = self.check_conservation() {
            return Err(self.abort(violation));
        }

        info!(
            hand_size,
            starting_side = %self.config.starting_side,
            deck = self.deck.len(),
            "round started"
        );

        let event = Event::RoundStarted {
            starting_side: self.config.starting_side,
            hand_size,
        };
        self.events.push(event.clone());
        for side in Side::BOTH {
            if self.hands[side].is_full() {
                self.events.push(Event::HandFull { side });
            }
        }
        Ok(event)
    }

    // === Actions ===

    /// Play `card` from `side`'s hand onto the altar.
    ///
    /// Emptying the hand ends the round in `side`'s favour. Otherwise the
    /// same side keeps the turn (the CPU's turn ends by itself once stuck).
    pub fn submit_play(&mut self, side: Side, card: Card) -> Result<Event, EngineError> {
        let action = Action::Play(card);
        if let Err(violation) = self.check_turn(side) {
            return Err(self.reject(side, action, violation));
        }
        if !self.hands[side].contains(card) {
            return Err(self.reject(side, action, RuleViolation::CardNotInHand { card }));
        }
        if let Some(top) = self.altar.top_card() {
            if !is_legal(card, Some(top)) {
                return Err(self.reject(side, action, RuleViolation::IllegalCard { card, top }));
            }
        }

        if let Err(violation) = self.hands[side].remove(card) {
            return Err(self.abort(violation));
        }
        self.altar.play(card);
        self.flags[side].has_played = true;
        self.record(side, action);

        debug!(side = %side, card = %card, hand = self.hands[side].size(), "card played");

        let event = Event::CardPlayed {
            side,
            card,
            new_top_card: card,
        };
        self.events.push(event.clone());

        if let Err(violation) = self.check_conservation() {
            return Err(self.abort(violation));
        }

        if self.hands[side].is_empty() {
            self.state = TurnState::RoundOver { winner: side };
            info!(winner = %side, turn = self.turn_number, "round over");
            self.events.push(Event::RoundOver { winner: side });
        } else {
            self.auto_end_cpu_turn(side);
        }

        Ok(event)
    }

    /// Draw the top card of the deck into `side`'s hand.
    ///
    /// Refused once the side has played this turn, when the hand is at its
    /// limit, when the deck is empty, or past `max_draws_per_turn`.
    pub fn submit_draw(&mut self, side: Side) -> Result<Event, EngineError> {
        if let Err(violation) = self.check_draw(side) {
            return Err(self.reject(side, Action::Draw, violation));
        }

        let Some(card) = self.deck.draw() else {
            return Err(self.abort(InvariantViolation::CardCountMismatch {
                expected: Card::DECK_SIZE,
                actual: self.card_count(),
            }));
        };
        if let Err(violation) = self.hands[side].add(card) {
            return Err(self.abort(violation));
        }

        let flags = &mut self.flags[side];
        flags.has_drawn = true;
        flags.draws += 1;
        self.record(side, Action::Draw);

        debug!(side = %side, card = %card, deck = self.deck.len(), "card drawn");

        let event = Event::CardDrawn { side, card };
        self.events.push(event.clone());
        if self.hands[side].is_full() {
            self.events.push(Event::HandFull { side });
        }
        if self.deck.is_empty() {
            self.events.push(Event::DeckEmpty);
        }

        if let Err(violation) = self.check_conservation() {
            return Err(self.abort(violation));
        }

        self.auto_end_cpu_turn(side);
        Ok(event)
    }

    /// End `side`'s turn and hand control to the other side.
    ///
    /// Always allowed on one's own turn, whether or not anything was played.
    pub fn submit_end_turn(&mut self, side: Side) -> Result<Event, EngineError> {
        if let Err(violation) = self.check_turn(side) {
            return Err(self.reject(side, Action::EndTurn, violation));
        }
        self.record(side, Action::EndTurn);
        Ok(self.pass_turn(side))
    }

    /// Submit an `Action` value. Dispatches to the matching `submit_*`.
    pub fn apply(&mut self, side: Side, action: Action) -> Result<Event, EngineError> {
        match action {
            Action::Play(card) => self.submit_play(side, card),
            Action::Draw => self.submit_draw(side),
            Action::EndTurn => self.submit_end_turn(side),
        }
    }

    /// Re-apply a recorded history, stopping at the first failure.
    ///
    /// Automatic CPU turn ends are not recorded; they recur on their own.
    pub fn replay(&mut self, records: &[ActionRecord]) -> Result<(), EngineError> {
        for record in records {
            self.apply(record.side, record.action)?;
        }
        Ok(())
    }

    /// Re-sort `side`'s hand for display. Not a rules action.
    pub fn arrange_hand(&mut self, side: Side, order: HandOrder) -> Result<Event, EngineError> {
        if self.state == TurnState::Aborted {
            return Err(RuleViolation::RoundAborted.into());
        }
        self.hands[side].arrange(order);
        let event = Event::HandArranged { side, order };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.altar.top_card()
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn altar(&self) -> &Altar {
        &self.altar
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Current turn number, starting at 1 and bumped on every turn change.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn flags(&self, side: Side) -> TurnFlags {
        self.flags[side]
    }

    /// Accepted actions of the current round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events queued but not yet drained.
    #[must_use]
    pub fn pending_events(&self) -> &[Event] {
        &self.events
    }

    /// Would `submit_draw(side)` succeed right now?
    #[must_use]
    pub fn can_draw(&self, side: Side) -> bool {
        self.check_draw(side).is_ok()
    }

    /// Cards `side` may legally play right now. Empty when it is not
    /// `side`'s turn or the round has ended.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> FxHashSet<Card> {
        if self.state.active_side() != Some(side) {
            return FxHashSet::default();
        }
        legal_set(self.hands[side].cards(), self.altar.top_card())
    }

    /// What an opponent policy may see when deciding for `side`.
    #[must_use]
    pub fn policy_view(&self, side: Side) -> PolicyView<'_> {
        PolicyView {
            hand: self.hands[side].cards(),
            top: self.altar.top_card(),
            can_draw: self.can_draw(side),
        }
    }

    /// Guidance for `side` in the current state.
    #[must_use]
    pub fn hint(&self, side: Side) -> Option<Hint> {
        let active = self.state.active_side()?;
        if active != side {
            return Some(Hint::NotYourTurn);
        }

        let flags = self.flags[side];
        if has_any_legal_move(self.hands[side].cards(), self.altar.top_card()) {
            (!flags.has_played && !flags.has_drawn).then_some(Hint::YourTurn)
        } else if self.can_draw(side) {
            Some(Hint::DrawOrEndTurn)
        } else {
            Some(Hint::NoValidMovesEndTurn)
        }
    }

    /// Cards across deck, both hands and the altar.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(|(_, hand)| hand.size()).sum::<usize>()
            + self.altar.len()
    }

    /// Verify the four containers hold each of the 52 cards exactly once.
    pub fn check_conservation(&self) -> Result<(), InvariantViolation> {
        let actual = self.card_count();
        if actual != Card::DECK_SIZE {
            return Err(InvariantViolation::CardCountMismatch {
                expected: Card::DECK_SIZE,
                actual,
            });
        }

        let mut seen = FxHashSet::default();
        let all = self
            .deck
            .cards()
            .iter()
            .copied()
            .chain(self.hands.iter().flat_map(|(_, hand)| hand.iter()))
            .chain(self.altar.iter());
        for card in all {
            if !seen.insert(card) {
                return Err(InvariantViolation::DuplicateCard { card });
            }
        }
        Ok(())
    }

    // === Internals ===

    fn check_turn(&self, side: Side) -> Result<(), RuleViolation> {
        match self.state {
            TurnState::Aborted => Err(RuleViolation::RoundAborted),
            TurnState::RoundOver { .. } => Err(RuleViolation::RoundOver),
            state if state.active_side() != Some(side) => Err(RuleViolation::WrongTurn { side }),
            _ => Ok(()),
        }
    }

    fn check_draw(&self, side: Side) -> Result<(), RuleViolation> {
        self.check_turn(side)?;

        let flags = self.flags[side];
        if flags.has_played {
            return Err(RuleViolation::DrawAfterPlay);
        }
        if let Some(limit) = self.config.max_draws_per_turn {
            if flags.draws >= limit {
                return Err(RuleViolation::DrawLimitReached { limit });
            }
        }
        if self.hands[side].is_full() {
            return Err(RuleViolation::HandFull {
                limit: self.hands[side].limit(),
            });
        }
        if self.deck.is_empty() {
            return Err(RuleViolation::DeckEmpty);
        }
        Ok(())
    }

    /// End the CPU's turn once it can neither play nor usefully draw.
    fn auto_end_cpu_turn(&mut self, side: Side) {
        if side != Side::Cpu || self.state != TurnState::CpuTurn {
            return;
        }
        if has_any_legal_move(self.hands[side].cards(), self.altar.top_card()) {
            return;
        }
        if self.flags[side].has_played || !self.can_draw(side) {
            debug!(side = %side, "no legal move left, ending turn automatically");
            self.pass_turn(side);
        }
    }

    fn pass_turn(&mut self, side: Side) -> Event {
        let next = side.opponent();
        self.flags[side] = TurnFlags::default();
        self.flags[next] = TurnFlags::default();
        self.state = TurnState::turn_of(next);
        self.turn_number += 1;

        debug!(from = %side, to = %next, turn = self.turn_number, "turn changed");

        let event = Event::TurnChanged { new_side: next };
        self.events.push(event.clone());
        event
    }

    fn record(&mut self, side: Side, action: Action) {
        self.history.push_back(ActionRecord {
            side,
            action,
            turn: self.turn_number,
        });
    }

    fn reject(&self, side: Side, action: Action, violation: RuleViolation) -> EngineError {
        debug!(side = %side, action = %action, reason = %violation, "action rejected");
        violation.into()
    }

    /// Abandon the round: log, move to `Aborted` and queue `RoundAborted`.
    pub(crate) fn abort(&mut self, violation: InvariantViolation) -> EngineError {
        error!(reason = %violation, turn = self.turn_number, "invariant violated, aborting round");
        self.state = TurnState::Aborted;
        self.events.push(Event::RoundAborted {
            reason: violation.to_string(),
        });
        violation.into()
    }
}
