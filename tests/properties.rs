// tests/properties.rs
//! Random play over many deals: every move either lands or leaves the
//! table exactly as it was, and the deck is never lost or duplicated.

use std::collections::HashSet;

use klondike_rules::{DealConfig, GameError, Solitaire, StackType, Suit, Table};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn all_stacks() -> Vec<StackType> {
    let mut stacks = vec![StackType::Stock, StackType::Waste];
    stacks.extend((0..4).map(StackType::Foundation));
    stacks.extend((0..4).map(StackType::Tableau));
    stacks
}

fn random_play(rng: &mut StdRng, stacks: &[StackType]) -> Vec<StackType> {
    let len = if rng.gen_bool(0.4) { 1 } else { 2 };
    (0..len).filter_map(|_| stacks.choose(rng).copied()).collect()
}

fn assert_deck_intact(table: &Table) {
    let cards: Vec<(Suit, u8)> = table
        .piles()
        .flat_map(|(_, pile)| pile.cards().iter().map(|c| (c.suit(), c.rank().value())))
        .collect();
    assert_eq!(cards.len(), 52, "card count changed");
    let unique: HashSet<_> = cards.iter().collect();
    assert_eq!(unique.len(), 52, "duplicate card found");
}

fn assert_tops_face_up(table: &Table) {
    for (stack, pile) in table.piles() {
        if matches!(stack, StackType::Waste | StackType::Tableau(_)) {
            if let Some(top) = pile.top() {
                assert!(top.is_face_up(), "{} shows a face-down top", stack);
            }
        }
    }
}

#[test]
fn random_play_keeps_invariants() {
    let stacks = all_stacks();
    for seed in 0..40 {
        let mut game = Solitaire::with_config(DealConfig::seeded(seed));
        game.setup().unwrap();
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);

        for _ in 0..400 {
            let play = random_play(&mut rng, &stacks);
            let before = game.table().clone();
            match game.play(&play) {
                Ok(()) => {}
                Err(GameError::Rule(_)) => {
                    assert_eq!(game.table(), &before, "rejected move changed the table: {:?}", play);
                }
                Err(other) => panic!("unexpected error for {:?}: {}", play, other),
            }
            assert_deck_intact(game.table());
            assert_tops_face_up(game.table());
            assert_eq!(game.is_finished(), game.table().tableau.iter().all(|p| p.is_empty()));
        }
    }
}

#[test]
fn auto_foundation_succeeds_iff_some_foundation_accepts() {
    let mut game = Solitaire::with_config(DealConfig::seeded(99));
    game.setup().unwrap();

    for _ in 0..200 {
        for source in [StackType::Waste, StackType::Tableau(0), StackType::Tableau(1)] {
            let accepting = game.table().pile(source).and_then(|p| p.top()).and_then(|card| {
                game.table().foundations.iter().position(|f| f.check_stack(card).is_ok())
            });
            let foundation_lens: Vec<usize> =
                game.table().foundations.iter().map(|f| f.len()).collect();

            let result = game.play(&[source]);
            assert_eq!(result.is_ok(), accepting.is_some());
            if let Some(index) = accepting {
                assert_eq!(game.table().foundations[index].len(), foundation_lens[index] + 1);
            }
        }
        game.play(&[StackType::Stock]).unwrap();
    }
}
