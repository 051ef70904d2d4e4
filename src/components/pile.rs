// src/components/pile.rs

//! カードのパイル（山）だよ。
//!
//! パイルは自分が持っているカードの「持ち主」。カードは Vec の最後が一番上。
//! 積めるかどうかの判定はパイル自身のルール (`initial_rank`, `stacking`,
//! `movement`) が決める。

use itertools::Itertools;

use crate::components::card::{Card, Rank};
use crate::error::Violation;
use crate::logic::rules::Criterion;

/// [`Pile::try_push`] で断られたカード。カードは失くさずに呼び出し側へ返すよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub card: Card,
    pub violation: Violation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    /// true なら表向きのカードを全部見せる（場札、捨て札）。false なら一番上だけ。
    visible: bool,
    /// 空のパイルに最初に置けるランク。
    initial_rank: Option<Rank>,
    /// 一枚ずつ積むときのルール。
    stacking: Option<Criterion>,
    /// 何枚かまとめて動かすときのルール。
    movement: Option<Criterion>,
}

impl Pile {
    pub fn new(visible: bool) -> Self {
        Self { visible, ..Self::default() }
    }

    /// ルールなしでカードを包む。最後のカードが一番上。
    pub fn from_cards(cards: Vec<Card>, visible: bool) -> Self {
        Self { cards, visible, ..Self::default() }
    }

    pub fn with_initial_rank(mut self, rank: Rank) -> Self {
        self.initial_rank = Some(rank);
        self
    }

    pub fn with_stacking(mut self, criterion: Criterion) -> Self {
        self.stacking = Some(criterion);
        self
    }

    pub fn with_movement(mut self, criterion: Criterion) -> Self {
        self.movement = Some(criterion);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 下から上の順。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 一番上に `card` を積めるかどうか。
    /// 空なら `initial_rank`、そうでなければ `stacking` で判定する。
    pub fn check_stack(&self, card: &Card) -> Result<(), Violation> {
        match self.top() {
            None => match self.initial_rank {
                Some(required) if card.rank() != required => Err(Violation::InitialRank {
                    required,
                    found: card.clone(),
                }),
                _ => Ok(()),
            },
            Some(top) => self.stacking.map_or(Ok(()), |criterion| criterion.check(top, card)),
        }
    }

    /// ルールが OK なら `card` を積む。
    /// ダメならカードはそのまま [`Rejected`] に入れて返す (パイルは変わらない)。
    pub fn try_push(&mut self, card: Card) -> Result<(), Rejected> {
        match self.check_stack(&card) {
            Ok(()) => {
                self.cards.push(card);
                Ok(())
            }
            Err(violation) => Err(Rejected { card, violation }),
        }
    }

    /// ルールを無視して積む。配るときと、捨て札を山札に戻すとき用。
    pub fn push_forced(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// `source` の上から何枚をこのパイルに動かせるか。
    ///
    /// 候補は `source` の表向きの部分のうち、`movement` ルールでつながっている並び。
    /// `movement` ルールがなければ一番上の一枚だけが候補。
    /// 候補の中で、一番下のカードが [`Pile::check_stack`] を通る一番長いものを選ぶ。
    pub fn movable_run_len(&self, source: &Pile) -> Result<usize, Violation> {
        let cards = source.cards();
        let top = match cards.last() {
            Some(top) => top,
            None => return Err(Violation::EmptyPile),
        };
        // 裏向きのカードは動かせない
        if top.is_face_down() {
            return Err(Violation::NoMovableRun);
        }

        // 上から順に、下のカードとルールでつながっている間だけ数える
        let longest = match self.movement {
            None => 1,
            Some(criterion) => {
                1 + cards
                    .iter()
                    .rev()
                    .tuple_windows()
                    .take_while(|(upper, lower)| {
                        lower.is_face_up() && criterion.accepts(lower, upper)
                    })
                    .count()
            }
        };

        // 長い方から試して、最初に置けた長さを使う
        let mut last = None;
        for len in (1..=longest).rev() {
            match self.check_stack(&cards[cards.len() - len]) {
                Ok(()) => return Ok(len),
                Err(violation) => last = Some(violation),
            }
        }

        // 候補が一枚だけなら、その理由をそのまま返す
        match last {
            Some(violation) if longest == 1 => Err(violation),
            _ => Err(Violation::NoMovableRun),
        }
    }

    /// [`Pile::movable_run_len`] で選んだ並びを、順番そのままでこのパイルへ動かす。
    /// エラーのときは一枚も動かない。
    pub fn move_run(&mut self, source: &mut Pile) -> Result<usize, Violation> {
        let len = self.movable_run_len(source)?;
        let at = source.cards.len() - len;
        self.cards.extend(source.cards.drain(at..));
        Ok(len)
    }

    /// 全部のカードを裏向きにする。並び順はそのまま。
    pub fn turn_face_down(&mut self) {
        for card in self.cards.iter_mut().filter(|c| c.is_face_up()) {
            card.flip();
        }
    }

    /// 一番上が裏向きなら表に返す。返したら true。
    pub fn uncover(&mut self) -> bool {
        match self.top_mut() {
            Some(card) if card.is_face_down() => {
                card.flip();
                true
            }
            _ => false,
        }
    }
}
