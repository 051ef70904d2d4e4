// src/config/mod.rs
//! ゲームの設定と定数をまとめるよ。

pub mod rules;

pub use rules::DealConfig;
