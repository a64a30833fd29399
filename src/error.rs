//! Error types for parsing and construction.
//!
//! Playing a game never fails; these only surface at the edges where text or
//! caller-supplied parameters are turned into game values.

use thiserror::Error;

/// Errors that can occur when parsing a card symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card symbol")]
    Empty,
    /// The input is not a known rank symbol.
    #[error("unknown card rank")]
    UnknownRank,
}

/// Errors that can occur when parsing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The input names neither hit nor stand.
    #[error("unknown action, expected hit or stand")]
    UnknownAction,
}

/// Errors that can occur when building a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A stacked source needs at least one card to cycle through.
    #[error("stacked card source is empty")]
    Empty,
    /// A card symbol could not be parsed.
    #[error("invalid card: {0}")]
    Card(#[from] ParseCardError),
}

/// Errors that can occur when building a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Probability is NaN or outside `0.0..=1.0`.
    #[error("probability must be within 0.0 and 1.0")]
    InvalidProbability,
}
