// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod stock_waste;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use tableau::*;
pub use stock_waste::*;
pub use win_condition::*;
