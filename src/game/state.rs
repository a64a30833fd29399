//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Dealing initial cards.
    Dealing,
    /// Player plays out their hand.
    PlayerTurn,
    /// Player went over the limit; dealer wins without playing.
    PlayerBust,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer went over the limit; player wins.
    DealerBust,
    /// Both sides stood and their values were compared.
    Showdown,
}

impl GameState {
    /// Returns whether the game has ended in this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerBust | Self::Showdown)
    }
}
