// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ。
//! どの組札（Foundation）なら受け取ってくれるかを探す。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::Pile;

/// `card` を受け取れる最初の組札のインデックスを返す。
///
/// 組札は 0, 1, 2, 3 の順に調べて、最初に受け取れたところで止まる
/// (一番良い場所を探すわけじゃない)。どこにも置けなければ `None`。
pub fn find_automatic_foundation_move(foundations: &[Pile], card: &Card) -> Option<usize> {
    let found = foundations
        .iter()
        .position(|foundation| foundation.check_stack(card).is_ok());

    match found {
        Some(index) => debug!("  Found valid foundation [{}] for {}.", index, card),
        None => debug!("  No suitable foundation found for {}.", card),
    }
    found
}
