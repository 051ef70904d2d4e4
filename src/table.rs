// src/table.rs

//! テーブル（Table）はゲームの全パイルを持っている場所だよ。
//! 山札、捨て札、組札 4 つ、場札 4 列。

use crate::components::pile::Pile;
use crate::components::stack::StackType;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub stock: Pile,
    pub waste: Pile,
    pub foundations: Vec<Pile>,
    pub tableau: Vec<Pile>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// 空のテーブル。パイルはあるけどカードもルールもまだない。
    pub fn new() -> Self {
        Table {
            stock: Pile::default(),
            waste: Pile::default(),
            foundations: vec![Pile::default(); FOUNDATION_COUNT],
            tableau: vec![Pile::default(); TABLEAU_COUNT],
        }
    }

    pub fn pile(&self, stack: StackType) -> Option<&Pile> {
        match stack {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(usize::from(i)),
            StackType::Tableau(i) => self.tableau.get(usize::from(i)),
        }
    }

    pub fn pile_mut(&mut self, stack: StackType) -> Option<&mut Pile> {
        match stack {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            StackType::Tableau(i) => self.tableau.get_mut(usize::from(i)),
        }
    }

    /// 全パイルを場所つきで返す。順番は 山札、捨て札、組札、場札。
    pub fn piles(&self) -> impl Iterator<Item = (StackType, &Pile)> + '_ {
        let foundations = self
            .foundations
            .iter()
            .enumerate()
            .map(|(i, pile)| (StackType::Foundation(i as u8), pile));
        let tableau = self
            .tableau
            .iter()
            .enumerate()
            .map(|(i, pile)| (StackType::Tableau(i as u8), pile));

        [(StackType::Stock, &self.stock), (StackType::Waste, &self.waste)]
            .into_iter()
            .chain(foundations)
            .chain(tableau)
    }

    pub fn card_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// 移動元と移動先のパイルを同時に可変で借りる。
    /// ムーブで使う組み合わせだけ対応していて、それ以外 (同じパイル同士も) は `None`。
    pub(crate) fn pair_mut(&mut self, from: StackType, to: StackType) -> Option<(&mut Pile, &mut Pile)> {
        match (from, to) {
            (StackType::Waste, StackType::Foundation(j)) => {
                Some((&mut self.waste, self.foundations.get_mut(usize::from(j))?))
            }
            (StackType::Waste, StackType::Tableau(j)) => {
                Some((&mut self.waste, self.tableau.get_mut(usize::from(j))?))
            }
            (StackType::Tableau(i), StackType::Foundation(j)) => Some((
                self.tableau.get_mut(usize::from(i))?,
                self.foundations.get_mut(usize::from(j))?,
            )),
            (StackType::Tableau(i), StackType::Tableau(j)) if i != j => {
                // 同じ Vec から二つ借りるので split_at_mut で分ける
                let (i, j) = (usize::from(i), usize::from(j));
                if i.max(j) >= self.tableau.len() {
                    return None;
                }
                if i < j {
                    let (low, high) = self.tableau.split_at_mut(j);
                    Some((&mut low[i], &mut high[0]))
                } else {
                    let (low, high) = self.tableau.split_at_mut(i);
                    Some((&mut high[0], &mut low[j]))
                }
            }
            _ => None,
        }
    }
}
