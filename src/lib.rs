//! A player-versus-dealer card game simulation with optional `no_std` support.
//!
//! A [`Game`] deals two cards to each side, lets the player's [`Strategy`]
//! hit or stand until it stops or busts, does the same for the dealer, and
//! compares the final values. Cards come from a [`CardSource`], so games can
//! be driven by a seeded [`Deck`] or a fixed [`Stacked`] sequence.
//! [`Simulation`] plays many independent games and tallies the outcomes.
//!
//! # Example
//!
//! ```
//! use bjsim::{GameOptions, Simulation, Threshold};
//!
//! let mut sim = Simulation::new(GameOptions::default(), Threshold::new(15), Threshold::dealer(), 42);
//! let stats = sim.run(100);
//! assert_eq!(stats.games, 100);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod sim;
pub mod strategy;

// Re-export main types
pub use action::Action;
pub use card::{Card, RANK_COUNT};
pub use deck::{CardSource, Deck, Stacked};
pub use error::{DeckError, ParseActionError, ParseCardError, StrategyError};
pub use game::{Game, GameState, run_turn};
pub use hand::{HandState, HandStatus};
pub use options::GameOptions;
pub use result::{GameInfo, Winner};
pub use sim::{Simulation, SimulationStats};
pub use strategy::{Always, RandomStrategy, Strategy, Threshold};
