//! Property tests for dealing and turn rules.

use proptest::prelude::*;

use memory_pairs::{Deck, GameConfig, GameRng, Player, SelectOutcome, Session};

fn player() -> Player {
    Player::new("prop", "prop@example.com").unwrap()
}

proptest! {
    /// Every dealt deck holds `pairs` symbols, each exactly twice.
    #[test]
    fn prop_deck_multiset(seed in any::<u64>(), pairs in 1usize..=26) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(pairs, &mut rng).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);
        let counts = deck.symbol_counts();
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// Shuffling is a permutation of its input.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), data in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut expected = data.clone();
        let mut data = data;
        GameRng::new(seed).shuffle(&mut data);

        data.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(data, expected);
    }

    /// Moves increase by one per pair of reveals, never per single reveal,
    /// and the turn never holds more than two cards.
    #[test]
    fn prop_moves_follow_pairs(seed in any::<u64>(), picks in prop::collection::vec(0usize..20, 0..80)) {
        let mut rng = GameRng::new(seed);
        let mut session = Session::new_game(player(), &GameConfig::default(), &mut rng).unwrap();
        let mut pairs_revealed = 0u32;

        for index in picks {
            match session.select_card(index) {
                SelectOutcome::PendingResolution { .. } => {
                    pairs_revealed += 1;
                    session.resolve_pending_turn().unwrap();
                }
                SelectOutcome::AwaitingSecond { .. } | SelectOutcome::Rejected(_) => {}
            }
            prop_assert!(session.turn().len() <= 2);
            prop_assert_eq!(session.moves(), pairs_revealed);
        }

        prop_assert_eq!(session.is_completed(), session.matched_pairs() == 8);
        let matched = session.deck().iter().filter(|c| c.is_matched()).count();
        prop_assert_eq!(matched, session.matched_pairs() * 2);
    }
}

/// Over many deals each position sees every symbol.
#[test]
fn test_shuffle_spreads_symbols() {
    let mut rng = GameRng::new(99);
    let mut seen = vec![[false; 8]; 16];

    for _ in 0..500 {
        let deck = Deck::shuffled(8, &mut rng).unwrap();
        for card in deck.iter() {
            seen[card.index()][card.symbol().raw() as usize] = true;
        }
    }

    assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
}
