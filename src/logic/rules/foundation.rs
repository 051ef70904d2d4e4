//! 組札 (Foundation) のルールを定義するよ。
//! A から始めて、同じスートで一つずつ上がっていく。

use crate::components::card::Rank;
use crate::components::pile::Pile;

use super::common::{Criterion, RankOrder, SuitRule};

pub const FOUNDATION_STACKING: Criterion = Criterion::new(SuitRule::SameSuit, RankOrder::Ascending);

/// 空の組札を作る。最初に置けるのは A だけ。
/// スートは最初の一枚が置かれた時に決まる。
pub fn new_foundation() -> Pile {
    Pile::new(false)
        .with_initial_rank(Rank::Ace)
        .with_stacking(FOUNDATION_STACKING)
}
