// src/components/mod.rs

// カード、パイル、パイルの場所を表す部品たち。
pub mod card;
pub mod pile;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use pile::{Pile, Rejected};
pub use stack::StackType;
