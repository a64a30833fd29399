//! Hand state for one side of a game.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::GameOptions;

/// Extra points an ace is worth when counted high.
const SOFT_BONUS: u16 = 10;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is within the limit and may keep drawing.
    Live,
    /// Hand has gone over the limit. Terminal.
    Bust,
}

/// The state of one side's hand.
///
/// Hand states are values: adding a card produces a new state through
/// [`HandState::with_card`] and leaves the original untouched. The hard
/// [`sum`](HandState::sum) counts every ace as 1, so it strictly grows with
/// each card; [`value`](HandState::value) is the best total once a soft ace
/// is taken into account.
///
/// Totals are `u16` so that a hand can always climb past any `u8` limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Hard sum, aces counted as 1.
    sum: u16,
    /// Whether any ace has been dealt.
    has_ace: bool,
    /// Visible total of the opposing side.
    opponent: u16,
    /// Rules the hand is evaluated under.
    options: GameOptions,
}

impl HandState {
    /// Creates the state dealt from two cards.
    ///
    /// `opponent` is the opposing side's visible total: the dealer's up card
    /// for the player, the player's final value for the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, GameOptions, HandState};
    ///
    /// let state = HandState::from_deal(GameOptions::default(), Card::King, Card::Seven, 10);
    /// assert_eq!(state.sum(), 17);
    /// assert_eq!(state.opponent(), 10);
    /// ```
    #[must_use]
    pub fn from_deal(options: GameOptions, first: Card, second: Card, opponent: u16) -> Self {
        let state = Self {
            cards: Vec::with_capacity(4),
            sum: 0,
            has_ace: false,
            opponent,
            options,
        };
        state.push(first).push(second)
    }

    /// Returns the state after taking `card`.
    ///
    /// A bust hand is terminal and is returned unchanged.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        if self.is_bust() {
            return self.clone();
        }
        self.clone().push(card)
    }

    fn push(mut self, card: Card) -> Self {
        self.cards.push(card);
        self.sum = self.sum.saturating_add(u16::from(card.points()));
        self.has_ace |= card.is_ace();
        self
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hard sum, counting every ace as 1.
    #[must_use]
    pub const fn sum(&self) -> u16 {
        self.sum
    }

    /// Returns the best total of the hand.
    ///
    /// One ace counts as 11 if soft aces are enabled and that keeps the
    /// total within the limit.
    #[must_use]
    pub fn value(&self) -> u16 {
        if self.is_soft() {
            self.sum + SOFT_BONUS
        } else {
            self.sum
        }
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.has_ace
            && self.options.soft_aces
            && self.sum + SOFT_BONUS <= u16::from(self.options.limit)
    }

    /// Returns the visible total of the opposing side.
    #[must_use]
    pub const fn opponent(&self) -> u16 {
        self.opponent
    }

    /// Returns the options the hand is evaluated under.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        if self.sum > u16::from(self.options.limit) {
            HandStatus::Bust
        } else {
            HandStatus::Live
        }
    }

    /// Returns whether the hand has gone over the limit.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        matches!(self.status(), HandStatus::Bust)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    ///
    /// Always `false` for dealt hands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Visible value of a single card, the way an up card is shown to the
/// opposing side.
#[must_use]
pub fn up_card_value(card: Card, options: GameOptions) -> u16 {
    let points = u16::from(card.points());
    if card.is_ace() && options.soft_aces && points + SOFT_BONUS <= u16::from(options.limit) {
        points + SOFT_BONUS
    } else {
        points
    }
}
