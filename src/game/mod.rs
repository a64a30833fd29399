//! Game engine and state management.

use alloc::vec::Vec;

use crate::deck::{CardSource, Deck};
use crate::hand::{HandState, up_card_value};
use crate::options::GameOptions;
use crate::result::{GameInfo, Winner};
use crate::strategy::Strategy;

pub mod state;
mod turn;

pub use state::GameState;
pub use turn::run_turn;

/// A single player-versus-dealer game.
///
/// The game owns both strategies and the card source. Each call to
/// [`Game::play`] deals a fresh pair of hands from the source, so a game can
/// be replayed; give separate games separately seeded sources to keep them
/// independent.
///
/// # Example
///
/// ```
/// use bjsim::{Game, GameOptions, Threshold};
///
/// let mut game = Game::seeded(GameOptions::default(), Threshold::new(16), Threshold::dealer(), 42);
/// let info = game.play();
/// assert!(game.state().is_terminal());
/// assert_eq!(info.end_state(), game.state());
/// ```
#[derive(Debug, Clone)]
pub struct Game<P, D, C = Deck> {
    /// Game options.
    options: GameOptions,
    /// Player strategy.
    player: P,
    /// Dealer strategy.
    dealer: D,
    /// Where every card comes from.
    source: C,
    /// Current game state.
    state: GameState,
}

impl<P: Strategy, D: Strategy> Game<P, D> {
    /// Creates a game drawing from a [`Deck`] with the given seed.
    #[must_use]
    pub fn seeded(options: GameOptions, player: P, dealer: D, seed: u64) -> Self {
        Self::new(options, player, dealer, Deck::new(seed))
    }
}

impl<P: Strategy, D: Strategy, C: CardSource> Game<P, D, C> {
    /// Creates a game with an explicit card source.
    #[must_use]
    pub const fn new(options: GameOptions, player: P, dealer: D, source: C) -> Self {
        Self {
            options,
            player,
            dealer,
            source,
            state: GameState::Dealing,
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the card source.
    pub const fn source(&self) -> &C {
        &self.source
    }

    fn enter(&mut self, state: GameState) {
        log::trace!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Plays a full game and returns its record.
    ///
    /// Deals two cards each (player first), plays the player's hand, then the
    /// dealer's unless the player bust, and compares values if both stood.
    pub fn play(&mut self) -> GameInfo {
        self.enter(GameState::Dealing);

        let player_cards = (self.source.next_card(), self.source.next_card());
        let dealer_cards = (self.source.next_card(), self.source.next_card());
        log::debug!(
            "dealt player {} {}, dealer {} {}",
            player_cards.0,
            player_cards.1,
            dealer_cards.0,
            dealer_cards.1
        );

        self.enter(GameState::PlayerTurn);
        let mut player_log = Vec::new();
        let initial = HandState::from_deal(
            self.options,
            player_cards.0,
            player_cards.1,
            up_card_value(dealer_cards.0, self.options),
        );
        let player_final = run_turn(&mut self.source, initial, &mut self.player, |state| {
            player_log.push(state.clone());
        });

        if player_final.is_bust() {
            self.enter(GameState::PlayerBust);
            return log_result(GameInfo {
                player_log,
                dealer_log: Vec::new(),
                player_final,
                dealer_final: None,
                end: GameState::PlayerBust,
                winner: Winner::Dealer,
            });
        }

        self.enter(GameState::DealerTurn);
        let mut dealer_log = Vec::new();
        let initial = HandState::from_deal(
            self.options,
            dealer_cards.0,
            dealer_cards.1,
            player_final.value(),
        );
        let dealer_final = run_turn(&mut self.source, initial, &mut self.dealer, |state| {
            dealer_log.push(state.clone());
        });

        let (end, winner) = if dealer_final.is_bust() {
            (GameState::DealerBust, Winner::Player)
        } else {
            (
                GameState::Showdown,
                Winner::showdown(player_final.value(), dealer_final.value()),
            )
        };
        self.enter(end);

        log_result(GameInfo {
            player_log,
            dealer_log,
            player_final,
            dealer_final: Some(dealer_final),
            end,
            winner,
        })
    }
}

fn log_result(info: GameInfo) -> GameInfo {
    log::debug!(
        "{:?}: player {} vs dealer {}, winner {:?}",
        info.end,
        info.player_final.value(),
        info.dealer_final.as_ref().map_or(0, HandState::value),
        info.winner
    );
    info
}
