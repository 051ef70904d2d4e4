//! ルール判定で共通して使う型と関数を置くよ。
//!
//! パイルごとの「積み方」「動かし方」のルールはコードではなくデータ
//! (`Criterion`) で持つ。判定は `Criterion::check` という純粋な関数だけ。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank};
use crate::error::Violation;

/// 上に置くカードと、すでに一番上にあるカードのスート/色の関係。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitRule {
    Any,
    SameSuit,
    DifferentSuit,
    SameColor,
    DifferentColor,
}

/// ランクの並び方。`Ascending` は「一番上 + 1」のカードだけ置ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankOrder {
    Any,
    Ascending,
    Descending,
}

/// 一番上のカードと、これから置くカードの関係 (スート/色 と ランクの並び)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub suit: SuitRule,
    pub order: RankOrder,
}

impl Criterion {
    pub const fn new(suit: SuitRule, order: RankOrder) -> Self {
        Self { suit, order }
    }

    /// `incoming` を `top` の真上に置けるかチェックする。
    /// スート/色を先に見て、そのあとランクを見るよ。
    pub fn check(&self, top: &Card, incoming: &Card) -> Result<(), Violation> {
        if !self.suit.holds(top, incoming) {
            return Err(Violation::Suit {
                rule: self.suit,
                top: top.clone(),
                incoming: incoming.clone(),
            });
        }
        if !self.order.holds(top, incoming) {
            return Err(Violation::Order {
                order: self.order,
                top: top.clone(),
                incoming: incoming.clone(),
            });
        }
        Ok(())
    }

    pub fn accepts(&self, top: &Card, incoming: &Card) -> bool {
        self.check(top, incoming).is_ok()
    }
}

impl SuitRule {
    fn holds(self, top: &Card, incoming: &Card) -> bool {
        match self {
            SuitRule::Any => true,
            SuitRule::SameSuit => top.suit() == incoming.suit(),
            SuitRule::DifferentSuit => top.suit() != incoming.suit(),
            SuitRule::SameColor => top.color() == incoming.color(),
            SuitRule::DifferentColor => top.color() != incoming.color(),
        }
    }
}

impl RankOrder {
    fn holds(self, top: &Card, incoming: &Card) -> bool {
        match self {
            RankOrder::Any => true,
            // K の上には何も来ない (from_value(14) は None)
            RankOrder::Ascending => Rank::from_value(top.rank().value() + 1) == Some(incoming.rank()),
            RankOrder::Descending => Rank::from_value(incoming.rank().value() + 1) == Some(top.rank()),
        }
    }
}
