//! Session scenario tests.
//!
//! These tests play whole turns against shuffled decks:
//! - Matching and mismatching pairs
//! - Move counting
//! - Completion and the final score

use memory_pairs::{
    Deck, GameConfig, GameError, GameRng, Player, RejectReason, Resolution, SelectOutcome,
    Session, SessionPhase, Symbol, TurnPhase,
};

fn player() -> Player {
    Player::new("quinn", "quinn@example.com").unwrap().with_attempt(1)
}

fn shuffled_session(seed: u64) -> Session {
    let mut rng = GameRng::new(seed);
    Session::new_game(player(), &GameConfig::default(), &mut rng).unwrap()
}

fn pair_of(session: &Session, symbol: Symbol) -> (usize, usize) {
    let positions = session.deck().positions_of(symbol);
    assert_eq!(positions.len(), 2, "symbol {symbol} must appear twice");
    (positions[0], positions[1])
}

/// Selecting both `A` cards of a shuffled deck is a match.
#[test]
fn test_matching_pair_scenario() {
    let mut session = shuffled_session(42);
    let a = Symbol::from_letter('A').unwrap();
    let (first, second) = pair_of(&session, a);

    assert_eq!(session.select_card(first), SelectOutcome::AwaitingSecond { index: first });
    assert_eq!(
        session.select_card(second),
        SelectOutcome::PendingResolution { first, second }
    );

    let resolution = session.resolve_pending_turn().unwrap();
    assert_eq!(resolution, Resolution::Match { first, second, symbol: a });
    assert_eq!(session.matched_pairs(), 1);
    assert_eq!(session.moves(), 1);
    assert!(session.card(first).unwrap().is_matched());
    assert!(session.card(second).unwrap().is_matched());
}

/// One `A` and one `B` is a mismatch; both flip back.
#[test]
fn test_mismatch_scenario() {
    let mut session = shuffled_session(7);
    let (a, _) = pair_of(&session, Symbol::from_letter('A').unwrap());
    let (b, _) = pair_of(&session, Symbol::from_letter('B').unwrap());

    session.select_card(a);
    session.select_card(b);
    assert_eq!(session.card(a).unwrap().state(), memory_pairs::CardState::Revealed);

    let resolution = session.resolve_pending_turn().unwrap();
    assert_eq!(resolution, Resolution::Mismatch { first: a, second: b });
    assert!(session.card(a).unwrap().is_hidden());
    assert!(session.card(b).unwrap().is_hidden());
    assert_eq!(session.moves(), 1);
    assert_eq!(session.matched_pairs(), 0);
    assert_eq!(session.turn_phase(), TurnPhase::Empty);
}

/// Optimal play finds all eight pairs in eight moves.
#[test]
fn test_optimal_play_completes() {
    let mut session = shuffled_session(2024);

    for id in 0..8u8 {
        for _ in 0..5 {
            session.tick();
        }

        let (first, second) = pair_of(&session, Symbol::new(id));
        session.select_card(first);
        session.select_card(second);
        let resolution = session.resolve_pending_turn().unwrap();

        if id < 7 {
            assert!(matches!(resolution, Resolution::Match { .. }));
            assert_eq!(session.phase(), SessionPhase::Active);
        } else {
            assert!(matches!(resolution, Resolution::MatchAndComplete { .. }));
        }
    }

    assert_eq!(session.phase(), SessionPhase::Completed);
    assert!(session.deck().all_matched());

    let score = session.finalize_score().unwrap();
    assert_eq!(score.moves, 8);
    assert_eq!(score.elapsed_seconds, 40);
    assert_eq!(score.nickname, "quinn");
    assert_eq!(score.email, "quinn@example.com");
    assert_eq!(score.attempt_number, 1);
}

/// A third selection while two cards are pending has no effect at all.
#[test]
fn test_third_selection_is_noop() {
    let mut session = shuffled_session(11);
    session.select_card(0);
    session.select_card(1);

    let before = session.clone();
    for index in 2..16 {
        assert_eq!(
            session.select_card(index),
            SelectOutcome::Rejected(RejectReason::TurnFull)
        );
    }
    assert_eq!(session, before);
    assert_eq!(session.moves(), 1);
}

/// Mismatches never produce matched cards, and matches never revert.
#[test]
fn test_matches_are_permanent() {
    let mut session = Session::with_deck(player(), Deck::from_letters("AABBCCDD").unwrap());
    session.start();

    session.select_card(0);
    session.select_card(1);
    session.resolve_pending_turn().unwrap();

    // Mismatch a few times next to the matched pair.
    for _ in 0..3 {
        session.select_card(2);
        session.select_card(4);
        assert!(!session.resolve_pending_turn().unwrap().is_match());
        assert!(session.card(0).unwrap().is_matched());
        assert!(session.card(1).unwrap().is_matched());
        assert!(session.card(2).unwrap().is_hidden());
        assert!(session.card(4).unwrap().is_hidden());
    }

    assert_eq!(session.matched_pairs(), 1);
    assert_eq!(session.moves(), 4);
}

/// Completion is reached only when the last pair is matched.
#[test]
fn test_completed_iff_all_pairs() {
    let mut session = Session::with_deck(player(), Deck::from_letters("ABCABC").unwrap());
    session.start();

    for (first, second) in [(0, 3), (1, 4)] {
        session.select_card(first);
        session.select_card(second);
        session.resolve_pending_turn().unwrap();
        assert!(!session.is_completed());
        assert!(matches!(session.finalize_score(), Err(GameError::NotCompleted)));
    }

    session.select_card(2);
    session.select_card(5);
    assert!(session.resolve_pending_turn().unwrap().completes());
    assert!(session.is_completed());
    assert_eq!(session.matched_pairs(), 3);
}

/// Ticks only count while the session is active.
#[test]
fn test_tick_inactive() {
    let mut rng = GameRng::new(1);
    let mut session = Session::new(player(), &GameConfig::default(), &mut rng).unwrap();

    assert!(!session.is_active());
    assert_eq!(session.tick(), 0);
    assert_eq!(session.elapsed_seconds(), 0);

    session.start();
    assert_eq!(session.tick(), 1);
    assert_eq!(session.tick(), 2);
}

/// Smaller boards complete after their own pair count.
#[test]
fn test_configured_pair_count() {
    let config = GameConfig::default().with_pairs(3).with_columns(3);
    let mut rng = GameRng::new(5);
    let mut session = Session::new_game(player(), &config, &mut rng).unwrap();
    assert_eq!(session.deck().len(), 6);
    assert_eq!(session.grid_position(4), Some((1, 1)));
    assert_eq!(session.grid_position(6), None);

    for id in 0..3u8 {
        let (first, second) = pair_of(&session, Symbol::new(id));
        session.select_card(first);
        session.select_card(second);
        session.resolve_pending_turn().unwrap();
    }

    assert!(session.is_completed());
    assert_eq!(session.finalize_score().unwrap().moves, 3);
}
