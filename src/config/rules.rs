// src/config/rules.rs
//! テーブルの構成に関する定数と、配り方の設定を定義するよ！
//! パイルの数や、場札の各列に配る枚数など。

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52; // 1 デッキの枚数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートごとに一つ)
pub const TABLEAU_COUNT: usize = 4; // 場札の列数

// --- 場札への配り方 ---
// 列 i には TABLEAU_BASE_DEAL 枚、i < EXTRA_CARD_COLUMNS の列にはさらに 1 枚配る。
pub const TABLEAU_BASE_DEAL: usize = 4;
pub const EXTRA_CARD_COLUMNS: usize = 4;

/// 場札の列 `column` に配る枚数。
pub fn deal_count(column: usize) -> usize {
    TABLEAU_BASE_DEAL + usize::from(column < EXTRA_CARD_COLUMNS)
}

/// 新しいゲームの配り方の設定。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealConfig {
    /// シャッフルの seed。`None` なら毎回ちがう並び (thread RNG)。
    #[serde(default)]
    pub seed: Option<u64>,
}

impl DealConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_gets_five_cards() {
        for column in 0..TABLEAU_COUNT {
            assert_eq!(deal_count(column), 5, "列 {} には 5 枚配るはず", column);
        }
        // 5 列目以降があれば 4 枚
        assert_eq!(deal_count(EXTRA_CARD_COLUMNS), TABLEAU_BASE_DEAL);
    }

    #[test]
    fn deal_config_from_json() {
        let cfg: DealConfig = serde_json::from_str(r#"{"seed":42}"#).unwrap();
        assert_eq!(cfg, DealConfig::seeded(42));
        let cfg: DealConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DealConfig::default());
    }
}
