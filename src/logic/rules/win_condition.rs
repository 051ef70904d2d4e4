//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::pile::Pile;

/// 場札の列が全部空になったらクリア。
pub fn check_win_condition(tableau: &[Pile]) -> bool {
    tableau.iter().all(Pile::is_empty)
}
