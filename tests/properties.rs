//! Property tests for deck invariants over arbitrary tables and seeds.

use exploding_cards::{Card, CardKind, CardType, Deck, DeckOptions, Draw};
use proptest::prelude::*;

fn table() -> impl Strategy<Value = DeckOptions> {
    (
        0usize..6,
        0usize..6,
        0usize..6,
        0usize..6,
        0usize..12,
        0u8..20,
        0u8..20,
    )
        .prop_map(|(bomb, defuse, skip, nope, points, a, b)| {
            DeckOptions::from_card_types([
                CardType::new(CardKind::Bomb, bomb),
                CardType::new(CardKind::Defuse, defuse),
                CardType::new(CardKind::SkipTurn, skip),
                CardType::new(CardKind::Nope, nope),
                CardType::points(points, a.min(b), a.max(b)),
            ])
        })
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}

proptest! {
    #[test]
    fn build_matches_table(options in table(), seed in any::<u64>()) {
        let mut deck = Deck::new(options.clone(), seed).unwrap();
        deck.build();

        prop_assert_eq!(deck.len(), options.total_cards());
        let composition = deck.composition();
        for kind in CardKind::ALL {
            prop_assert_eq!(
                composition.get(&kind).copied().unwrap_or(0),
                options.count_of(kind)
            );
        }

        let range = options.points_range().unwrap();
        for card in deck.cards() {
            match card.value {
                Some(value) => prop_assert!(range.contains(value)),
                None => prop_assert_ne!(card.kind, CardKind::Points),
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation(options in table(), seed in any::<u64>(), drawn in 0usize..10) {
        let mut deck = Deck::new(options, seed).unwrap();
        deck.build();
        for _ in 0..drawn {
            deck.draw();
        }

        let before = sorted(deck.cards());
        deck.shuffle();
        prop_assert_eq!(sorted(deck.cards()), before);
    }

    #[test]
    fn draw_removes_exactly_the_returned_card(options in table(), seed in any::<u64>()) {
        let mut deck = Deck::new(options, seed).unwrap();
        deck.reset();

        loop {
            let before = deck.cards().to_vec();
            match deck.draw() {
                Draw::Card(card) => {
                    prop_assert_eq!(deck.len(), before.len() - 1);
                    prop_assert_eq!(before.last(), Some(&card));
                    prop_assert_eq!(deck.cards(), &before[..before.len() - 1]);
                }
                Draw::Empty => {
                    prop_assert!(before.is_empty());
                    prop_assert!(deck.is_empty());
                    break;
                }
            }
        }
    }

    #[test]
    fn reset_always_refills(options in table(), seed in any::<u64>(), drawn in 0usize..40) {
        let mut deck = Deck::new(options, seed).unwrap();
        deck.reset();
        for _ in 0..drawn {
            deck.draw();
        }

        deck.reset();
        prop_assert_eq!(deck.len(), deck.full_size());
    }
}
