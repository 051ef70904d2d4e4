// src/lib.rs

//! Rules engine for a four-column Klondike-style solitaire.
//!
//! [`Solitaire`] deals the table and applies moves described as one or two
//! [`StackType`] references. Illegal moves come back as
//! [`GameError::Rule`] and leave the table untouched.

pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod table;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use components::{Card, CardColor, Pile, Rank, Rejected, StackType, Suit};
pub use config::DealConfig;
pub use error::{GameError, GameResult, Violation};
pub use logic::Solitaire;
pub use protocol::{PileView, TableView};
pub use table::Table;
