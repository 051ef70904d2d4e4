// src/protocol.rs

//! ホスト (UI や JS) に渡すテーブルの見た目データを定義するよ。
//! `serde` で JSON にしてそのまま送れる形にしてある。

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::pile::Pile;
pub use crate::components::stack::StackType;
use crate::table::Table;

/// 一つのパイルの見え方。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileView {
    pub stack: StackType,
    /// 裏向きのカードも含めた枚数。
    pub len: usize,
    /// 見えているカード (下から上へ)。
    /// visible なパイルは表向きのカード全部、そうでないパイルは表向きの一番上だけ。
    pub shown: Vec<Card>,
}

impl PileView {
    pub fn new(stack: StackType, pile: &Pile) -> Self {
        let shown = if pile.is_visible() {
            pile.cards().iter().filter(|c| c.is_face_up()).cloned().collect()
        } else {
            pile.top().filter(|c| c.is_face_up()).cloned().into_iter().collect()
        };
        Self { stack, len: pile.len(), shown }
    }
}

/// テーブル全体の見え方。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub piles: Vec<PileView>,
    pub finished: bool,
}

impl From<&Table> for TableView {
    fn from(table: &Table) -> Self {
        TableView {
            piles: table.piles().map(|(stack, pile)| PileView::new(stack, pile)).collect(),
            finished: table.tableau.iter().all(Pile::is_empty),
        }
    }
}
