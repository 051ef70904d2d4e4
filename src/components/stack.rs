// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::{GameError, GameResult};

/// カードが置かれている場所の種類だよ。
/// ムーブの指定 (どこから、どこへ) もこれで表す。
/// `Stock` と `Waste` は一つずつなのでインデックスは持たない。
///
/// JSON では `"Stock"`, `"Waste"`, `{"Foundation":0}`, `{"Tableau":3}` になる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所。
    Waste,
    /// 組札 (0-3)。最初の一枚が置かれるまでスートは決まっていない。
    Foundation(u8),
    /// 場札の列 (0-3)。
    Tableau(u8),
}

impl StackType {
    /// テーブルにないインデックスをはじく。パイルに触る前に呼ぶこと！
    /// 範囲外は遊び方のミスじゃなくて呼び出し側のバグなので `CallerContract` になる。
    pub fn validate(self) -> GameResult<Self> {
        match self {
            StackType::Foundation(i) if usize::from(i) >= FOUNDATION_COUNT => {
                Err(GameError::CallerContract {
                    message: format!(
                        "foundation index {} out of range (0..{})",
                        i, FOUNDATION_COUNT
                    ),
                })
            }
            StackType::Tableau(i) if usize::from(i) >= TABLEAU_COUNT => {
                Err(GameError::CallerContract {
                    message: format!("tableau index {} out of range (0..{})", i, TABLEAU_COUNT),
                })
            }
            other => Ok(other),
        }
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Stock => write!(f, "stock"),
            StackType::Waste => write!(f, "waste"),
            StackType::Foundation(i) => write!(f, "foundation {}", i),
            StackType::Tableau(i) => write!(f, "tableau {}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_in_range_indices() {
        assert_eq!(StackType::Tableau(3).validate().ok(), Some(StackType::Tableau(3)));
        assert_eq!(StackType::Foundation(0).validate().ok(), Some(StackType::Foundation(0)));
        // Stock と Waste はインデックスなし
        assert!(StackType::Stock.validate().is_ok());
        assert!(StackType::Waste.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_indices() {
        assert!(matches!(
            StackType::Tableau(4).validate(),
            Err(GameError::CallerContract { .. })
        ));
        assert!(matches!(
            StackType::Foundation(9).validate(),
            Err(GameError::CallerContract { .. })
        ));
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&[StackType::Waste, StackType::Tableau(2)]).unwrap();
        assert_eq!(json, r#"["Waste",{"Tableau":2}]"#);

        let parsed: Vec<StackType> = serde_json::from_str(r#"[{"Foundation":1}]"#).unwrap();
        assert_eq!(parsed, vec![StackType::Foundation(1)]);
    }
}
