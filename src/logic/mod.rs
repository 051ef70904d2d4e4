// src/logic/mod.rs
//! ゲームのロジック（ルール、デッキ、ムーブの実行）をまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
pub mod solitaire;
pub mod stock;

pub use solitaire::Solitaire;
