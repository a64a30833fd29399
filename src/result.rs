//! Game outcome types.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::game::GameState;
use crate::hand::HandState;

/// Winner of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Player wins (dealer busts or player has the higher value).
    Player,
    /// Dealer wins (player busts or dealer has the higher value).
    Dealer,
    /// Equal values at showdown.
    Draw,
}

impl Winner {
    /// Compares final values when neither side has bust.
    ///
    /// ```
    /// use bjsim::Winner;
    ///
    /// assert_eq!(Winner::showdown(20, 18), Winner::Player);
    /// assert_eq!(Winner::showdown(17, 17), Winner::Draw);
    /// assert_eq!(Winner::showdown(16, 19), Winner::Dealer);
    /// ```
    #[must_use]
    pub fn showdown(player_value: u16, dealer_value: u16) -> Self {
        match player_value.cmp(&dealer_value) {
            Ordering::Greater => Self::Player,
            Ordering::Equal => Self::Draw,
            Ordering::Less => Self::Dealer,
        }
    }
}

/// Record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    /// Player states at each decision point, in order.
    pub(crate) player_log: Vec<HandState>,
    /// Dealer states at each decision point, in order.
    pub(crate) dealer_log: Vec<HandState>,
    /// Player's final hand.
    pub(crate) player_final: HandState,
    /// Dealer's final hand; `None` if the dealer never played.
    pub(crate) dealer_final: Option<HandState>,
    /// Terminal state the game ended in.
    pub(crate) end: GameState,
    /// The winner.
    pub(crate) winner: Winner,
}

impl GameInfo {
    /// Returns the player's hand at every decision point.
    #[must_use]
    pub fn player_log(&self) -> &[HandState] {
        &self.player_log
    }

    /// Returns the dealer's hand at every decision point.
    ///
    /// Empty when the player bust and the dealer never played.
    #[must_use]
    pub fn dealer_log(&self) -> &[HandState] {
        &self.dealer_log
    }

    /// Returns the player's final hand.
    #[must_use]
    pub const fn player_final(&self) -> &HandState {
        &self.player_final
    }

    /// Returns the dealer's final hand, if the dealer played.
    #[must_use]
    pub const fn dealer_final(&self) -> Option<&HandState> {
        self.dealer_final.as_ref()
    }

    /// Returns the terminal state the game ended in.
    #[must_use]
    pub const fn end_state(&self) -> GameState {
        self.end
    }

    /// Returns the winner.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.winner
    }
}
