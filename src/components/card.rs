// src/components/card.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// カードのスート（マーク）だよ。色は `color()` で求める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// カードの色。交互の色で積むルールに使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク。A は 1、K は 13 として扱うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// A なら 1、K なら 13。
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのもの。スートとランクは作った後は変わらない。
/// 向き (`is_face_up`) だけは `flip()` で変わるよ。
///
/// Copy は付けない：カードはどこか一つのパイルだけが持っているものだから。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn is_face_down(&self) -> bool {
        !self.is_face_up
    }

    /// 表と裏をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank(), Rank::Ace);
        assert!(card.is_face_down(), "新しいカードは裏向きのはず");
        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn flip_toggles_orientation() {
        let mut card = Card::new(Suit::Heart, Rank::Seven);
        card.flip();
        assert!(card.is_face_up());
        card.flip();
        assert!(card.is_face_down());
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(5), Some(Rank::Five));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Heart.color(), CardColor::Red);
        assert_eq!(Suit::Diamond.color(), CardColor::Red);
        assert_eq!(Suit::Club.color(), CardColor::Black);
        assert_eq!(Suit::Spade.color(), CardColor::Black);
    }

    #[test]
    fn display_uses_rank_and_suit_symbol() {
        assert_eq!(Card::face_up(Suit::Diamond, Rank::Ten).to_string(), "10♦");
        assert_eq!(Card::new(Suit::Club, Rank::Queen).to_string(), "Q♣");
    }
}
