//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::pile::Pile;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 捨て札を作る。表向きのカードを全部見せるけど、ルールは持たない。
/// 何を置くかはムーブの処理側が決める。
pub fn new_waste() -> Pile {
    Pile::new(true)
}

/// 山札を作る。見えるのは (裏向きの) 一番上だけで、ルールもなし。
pub fn new_stock() -> Pile {
    Pile::new(false)
}
