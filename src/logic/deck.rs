// src/logic/deck.rs

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::pile::Pile;
use crate::config::rules::DECK_SIZE;
use crate::logic::rules::new_stock;

/// 標準的な52枚のカードデッキを生成する関数だよ！
///
/// 生成された時点では、すべてのカードは裏向きになってる。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
pub fn shuffle_deck(deck: &mut Vec<Card>) {
    let mut rng = thread_rng();
    deck.shuffle(&mut rng);
}

/// 同じ seed なら毎回同じ順番になるシャッフル。
pub fn shuffle_deck_seeded(deck: &mut Vec<Card>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// シャッフル済みで全部裏向きの山札を作る。すぐに配れる状態だよ。
/// パイルの最後のカードが最初に引かれる。
pub fn create_shuffled_stock(seed: Option<u64>) -> Pile {
    let mut deck = create_standard_deck();
    match seed {
        Some(seed) => shuffle_deck_seeded(&mut deck, seed),
        None => shuffle_deck(&mut deck),
    }
    debug!("Shuffled a {}-card deck (seed: {:?})", deck.len(), seed);

    // Vec の順番のまま山札に積む (最後の一枚が一番上)
    let mut stock = new_stock();
    for card in deck {
        stock.push_forced(card);
    }
    stock
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = deck.iter().map(|c| (c.suit(), c.rank())).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        let all_face_down = deck.iter().all(Card::is_face_down);
        assert!(all_face_down, "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        shuffle_deck(&mut shuffled_deck);

        // ごく稀に同じ順番になる可能性もあるので、完全なテストではない
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない (稀に起こりうる)");
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = create_standard_deck();
        let mut b = create_standard_deck();
        shuffle_deck_seeded(&mut a, 7);
        shuffle_deck_seeded(&mut b, 7);
        assert_eq!(a, b);

        let mut c = create_standard_deck();
        shuffle_deck_seeded(&mut c, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn shuffled_stock_is_hidden_and_full() {
        let stock = create_shuffled_stock(Some(1));
        assert_eq!(stock.len(), DECK_SIZE);
        assert!(!stock.is_visible());
        assert!(stock.cards().iter().all(Card::is_face_down));
    }
}
