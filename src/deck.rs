//! Card sources.
//!
//! Every draw site goes through [`CardSource`], so the random source of a
//! game can be swapped for a fixed sequence in tests.

extern crate alloc;

use alloc::vec::Vec;
use core::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANK_COUNT};
use crate::error::DeckError;

/// Something that deals cards.
pub trait CardSource {
    /// Draws the next card. Never fails.
    fn next_card(&mut self) -> Card;
}

impl<C: CardSource + ?Sized> CardSource for &mut C {
    fn next_card(&mut self) -> Card {
        (**self).next_card()
    }
}

/// An endless deck drawing uniformly at random with replacement.
///
/// Every rank is equally likely on every draw, regardless of what has already
/// been dealt; there is no finite shoe to run out of.
#[derive(Debug, Clone)]
pub struct Deck {
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{CardSource, Deck};
    ///
    /// let mut a = Deck::new(7);
    /// let mut b = Deck::new(7);
    /// assert_eq!(a.next_card(), b.next_card());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck drawing from an existing generator.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl CardSource for Deck {
    fn next_card(&mut self) -> Card {
        Card::ALL[self.rng.random_range(0..RANK_COUNT)]
    }
}

/// A card source that cycles through a fixed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stacked {
    cards: Vec<Card>,
    next: usize,
}

impl Stacked {
    /// Creates a source dealing `cards` in order, starting over once the
    /// sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if `cards` is empty.
    pub fn new(cards: impl Into<Vec<Card>>) -> Result<Self, DeckError> {
        let cards = cards.into();
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards, next: 0 })
    }

    /// Returns how many cards have been dealt so far.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.next
    }
}

impl CardSource for Stacked {
    fn next_card(&mut self) -> Card {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}

impl FromStr for Stacked {
    type Err = DeckError;

    /// Parses whitespace-separated card symbols, e.g. `"K 7 A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(cards)
    }
}

/// Card source backed by a closure.
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Creates a card source that calls `f` for every draw.
///
/// # Example
///
/// ```
/// use bjsim::{Card, CardSource, deck};
///
/// let mut source = deck::from_fn(|| Card::Two);
/// assert_eq!(source.next_card(), Card::Two);
/// ```
pub const fn from_fn<F: FnMut() -> Card>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> Card> CardSource for FromFn<F> {
    fn next_card(&mut self) -> Card {
        (self.0)()
    }
}
