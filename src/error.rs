// src/error.rs
//! Error types for the rules engine.
//!
//! Rule violations are recoverable: the table is left untouched and the
//! caller may try another move. Configuration and caller-contract errors
//! indicate a broken setup or a bug in the host.

use crate::components::card::{Card, Rank};
use crate::logic::rules::{RankOrder, SuitRule};

/// Why a move was refused by the game rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("pile is empty")]
    EmptyPile,

    #[error("cannot stack on any foundation")]
    NoFoundationAccepts,

    #[error("invalid move")]
    InvalidMove,

    #[error("cannot move a pile onto itself")]
    SamePile,

    /// An empty pile only accepts one specific rank as its first card.
    #[error("empty pile must start with {required:?}, got {found}")]
    InitialRank { required: Rank, found: Card },

    #[error("{incoming} cannot go on {top}: {rule:?} required")]
    Suit { rule: SuitRule, top: Card, incoming: Card },

    #[error("{incoming} cannot go on {top}: {order:?} rank required")]
    Order { order: RankOrder, top: Card, incoming: Card },

    #[error("no face-up run can be moved onto this pile")]
    NoMovableRun,
}

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move is well-formed but forbidden by the rules.
    #[error("rule violation: {0}")]
    Rule(#[from] Violation),

    /// Setup could not complete (for example, the deck ran out while dealing).
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The move descriptor itself is malformed.
    #[error("caller contract violated: {message}")]
    CallerContract { message: String },
}

impl GameError {
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            GameError::Rule(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
