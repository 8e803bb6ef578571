//! Round-level integration tests for the turn engine.

use altar_engine::core::{Card, EngineError, Event, Rank, RoundConfig, RuleViolation, Side, Suit};
use altar_engine::rules::{Hint, TableLayout, TurnEngine, TurnState};
use altar_engine::session::Session;
use altar_engine::GreedyOpponent;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

fn config() -> RoundConfig {
    RoundConfig::default().with_seed(42)
}

fn arranged(layout: TableLayout) -> TurnEngine {
    TurnEngine::from_layout(config(), layout).unwrap()
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_fresh_round_deals_four_each() {
    let mut engine = TurnEngine::new(config()).unwrap();

    assert_eq!(engine.deck_len(), 44);
    assert_eq!(engine.hand(Side::Player).size(), 4);
    assert_eq!(engine.hand(Side::Cpu).size(), 4);
    assert!(engine.altar().is_empty());
    assert_eq!(engine.top_card(), None);
    assert_eq!(engine.card_count(), 52);
    assert!(engine.check_conservation().is_ok());

    assert_eq!(
        engine.drain_events(),
        vec![Event::RoundStarted {
            starting_side: Side::Player,
            hand_size: 4
        }]
    );
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = TurnEngine::new(config()).unwrap();
    let card = engine.hand(Side::Player).cards()[0];
    engine.submit_play(Side::Player, card).unwrap();
    engine.submit_draw(Side::Player).unwrap_err();
    engine.submit_end_turn(Side::Player).unwrap();

    engine.start_round(6).unwrap();

    assert_eq!(engine.state(), TurnState::PlayerTurn);
    assert_eq!(engine.deck_len(), 40);
    assert_eq!(engine.hand(Side::Player).size(), 6);
    assert_eq!(engine.top_card(), None);
    assert_eq!(engine.turn_number(), 1);
    assert!(engine.history().is_empty());
}

#[test]
fn test_different_seeds_deal_differently() {
    let a = TurnEngine::new(RoundConfig::default().with_seed(1)).unwrap();
    let b = TurnEngine::new(RoundConfig::default().with_seed(2)).unwrap();

    let deal = |e: &TurnEngine| {
        (
            e.hand(Side::Player).cards().to_vec(),
            e.hand(Side::Cpu).cards().to_vec(),
        )
    };
    assert_ne!(deal(&a), deal(&b));
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_suit_match_is_the_only_legal_move() {
    let engine = arranged(TableLayout::new(
        &[card(Suit::Clubs, 5), card(Suit::Hearts, 9)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Clubs, 2)],
    ));

    let legal = engine.legal_moves(Side::Player);
    assert_eq!(legal.len(), 1);
    assert!(legal.contains(&card(Suit::Clubs, 5)));
    assert!(engine.legal_moves(Side::Cpu).is_empty());
}

#[test]
fn test_illegal_play_is_rejected_and_retryable() {
    let mut engine = arranged(TableLayout::new(
        &[card(Suit::Clubs, 5), card(Suit::Hearts, 9)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Clubs, 2)],
    ));

    let err = engine.submit_play(Side::Player, card(Suit::Hearts, 9)).unwrap_err();
    assert_eq!(
        err,
        EngineError::Rule(RuleViolation::IllegalCard {
            card: card(Suit::Hearts, 9),
            top: card(Suit::Clubs, 2),
        })
    );
    assert_eq!(
        err.to_string(),
        "Card must match the suit or rank of the last card"
    );

    engine.submit_play(Side::Player, card(Suit::Clubs, 5)).unwrap();
    assert_eq!(engine.top_card(), Some(card(Suit::Clubs, 5)));
}

#[test]
fn test_rank_match_is_legal() {
    let mut engine = arranged(TableLayout::new(
        &[card(Suit::Hearts, 9), card(Suit::Clubs, 1)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Diamonds, 9)],
    ));

    let legal = engine.legal_moves(Side::Player);
    assert_eq!(legal.len(), 1);
    assert!(legal.contains(&card(Suit::Hearts, 9)));

    let event = engine.submit_play(Side::Player, card(Suit::Hearts, 9)).unwrap();
    assert_eq!(
        event,
        Event::CardPlayed {
            side: Side::Player,
            card: card(Suit::Hearts, 9),
            new_top_card: card(Suit::Hearts, 9),
        }
    );
}

// =============================================================================
// Round end and scoring
// =============================================================================

#[test]
fn test_playing_last_card_wins_and_scores() {
    let layout = TableLayout::new(
        &[card(Suit::Hearts, 9)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Diamonds, 9)],
    );
    let mut session = Session::from_layout(config(), layout, GreedyOpponent).unwrap();
    assert_eq!(session.scores().player_wins(), 0);

    session.submit_play(Side::Player, card(Suit::Hearts, 9)).unwrap();

    assert_eq!(
        session.engine().state(),
        TurnState::RoundOver {
            winner: Side::Player
        }
    );
    assert_eq!(session.scores().player_wins(), 1);
    assert!(session
        .drain_events()
        .contains(&Event::RoundOver {
            winner: Side::Player
        }));
}

#[test]
fn test_nothing_accepted_after_round_over() {
    let mut engine = arranged(TableLayout::new(
        &[card(Suit::Hearts, 9)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Diamonds, 9)],
    ));
    engine.submit_play(Side::Player, card(Suit::Hearts, 9)).unwrap();

    for side in Side::BOTH {
        assert_eq!(
            engine.submit_draw(side),
            Err(RuleViolation::RoundOver.into())
        );
        assert_eq!(
            engine.submit_end_turn(side),
            Err(RuleViolation::RoundOver.into())
        );
        assert!(engine.legal_moves(side).is_empty());
        assert_eq!(engine.hint(side), None);
    }
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_from_empty_deck_is_rejected() {
    let mut engine = arranged(
        TableLayout::new(
            &[card(Suit::Clubs, 5), card(Suit::Hearts, 9)],
            &[card(Suit::Spades, 1)],
            &[card(Suit::Clubs, 2)],
        )
        .with_empty_deck(),
    );
    assert_eq!(engine.deck_len(), 0);

    assert_eq!(
        engine.submit_draw(Side::Player),
        Err(RuleViolation::DeckEmpty.into())
    );
    assert_eq!(engine.hand(Side::Player).size(), 2);

    // Play and end turn remain available.
    engine.submit_play(Side::Player, card(Suit::Clubs, 5)).unwrap();
    let event = engine.submit_end_turn(Side::Player).unwrap();
    assert_eq!(event, Event::TurnChanged { new_side: Side::Cpu });
}

#[test]
fn test_draw_is_closed_after_playing() {
    let mut engine = arranged(TableLayout::new(
        &[card(Suit::Clubs, 5), card(Suit::Clubs, 6)],
        &[card(Suit::Spades, 1)],
        &[card(Suit::Clubs, 2)],
    ));

    engine.submit_play(Side::Player, card(Suit::Clubs, 5)).unwrap();
    let deck = engine.deck_len();

    assert_eq!(
        engine.submit_draw(Side::Player),
        Err(RuleViolation::DrawAfterPlay.into())
    );
    assert_eq!(engine.deck_len(), deck);

    // Another legal play is still fine.
    engine.submit_play(Side::Player, card(Suit::Clubs, 6)).unwrap();
}

#[test]
fn test_draw_once_table_rule() {
    let mut engine = TurnEngine::from_layout(
        config().with_max_draws_per_turn(1),
        TableLayout::new(
            &[card(Suit::Hearts, 2)],
            &[card(Suit::Diamonds, 1)],
            &[card(Suit::Clubs, 3)],
        ),
    )
    .unwrap();

    engine.submit_draw(Side::Player).unwrap();
    assert_eq!(
        engine.submit_draw(Side::Player),
        Err(RuleViolation::DrawLimitReached { limit: 1 }.into())
    );
    assert_eq!(engine.hint(Side::Player), Some(Hint::NoValidMovesEndTurn));
}

#[test]
fn test_wrong_side_is_rejected() {
    let mut engine = TurnEngine::new(config()).unwrap();
    let card = engine.hand(Side::Cpu).cards()[0];

    let err = engine.submit_play(Side::Cpu, card).unwrap_err();
    assert_eq!(err, RuleViolation::WrongTurn { side: Side::Cpu }.into());
    assert_eq!(err.to_string(), "It's not your turn!");
    assert_eq!(engine.hint(Side::Cpu), Some(Hint::NotYourTurn));
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn test_event_stream_for_a_turn() {
    let mut engine = arranged(
        TableLayout::new(
            &[card(Suit::Hearts, 2)],
            &[card(Suit::Diamonds, 1)],
            &[card(Suit::Clubs, 3)],
        )
        .with_deck_size(1),
    );
    let top_of_deck = card(Suit::Spades, 13);

    engine.submit_draw(Side::Player).unwrap();
    engine.submit_end_turn(Side::Player).unwrap();

    assert_eq!(
        engine.drain_events(),
        vec![
            Event::CardDrawn {
                side: Side::Player,
                card: top_of_deck
            },
            Event::DeckEmpty,
            Event::TurnChanged { new_side: Side::Cpu },
        ]
    );
    assert!(engine.drain_events().is_empty());
}
