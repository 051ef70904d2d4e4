//! 場札 (Tableau) のルールを定義するよ。
//!
//! このバリアントでは、色違いで「一つ上」のランクを重ねていく
//! (普通のクロンダイクとは逆の昇順)。積むときも、まとめて動かすときも同じルール。
//! 空の列にはどのカードでも置ける。

use crate::components::pile::Pile;

use super::common::{Criterion, RankOrder, SuitRule};

pub const TABLEAU_STACKING: Criterion = Criterion::new(SuitRule::DifferentColor, RankOrder::Ascending);
pub const TABLEAU_MOVEMENT: Criterion = Criterion::new(SuitRule::DifferentColor, RankOrder::Ascending);

pub fn new_tableau_column() -> Pile {
    Pile::new(true)
        .with_stacking(TABLEAU_STACKING)
        .with_movement(TABLEAU_MOVEMENT)
}
