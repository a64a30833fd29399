//! Decision strategies.

extern crate alloc;

use alloc::boxed::Box;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::error::StrategyError;
use crate::hand::HandState;

/// A decision policy for one side of the game.
///
/// The turn loop only calls `decide` on hands that have not bust.
pub trait Strategy {
    /// Chooses the next action for `state`.
    fn decide(&mut self, state: &HandState) -> Action;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn decide(&mut self, state: &HandState) -> Action {
        (**self).decide(state)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&mut self, state: &HandState) -> Action {
        (**self).decide(state)
    }
}

/// Always makes the same decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Always(pub Action);

impl Strategy for Always {
    fn decide(&mut self, _state: &HandState) -> Action {
        self.0
    }
}

/// Hits until the hand value reaches a fixed threshold.
///
/// ```
/// use bjsim::{Action, Card, GameOptions, HandState, Strategy, Threshold};
///
/// let mut dealer = Threshold::dealer();
/// let state = HandState::from_deal(GameOptions::default(), Card::Ten, Card::Six, 18);
/// assert_eq!(dealer.decide(&state), Action::Hit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Value at or above which the strategy stands.
    pub stand_on: u16,
    /// Whether to keep hitting a soft total equal to `stand_on`.
    pub hit_soft: bool,
}

impl Threshold {
    /// Creates a strategy standing on `stand_on` or more, soft or hard.
    #[must_use]
    pub const fn new(stand_on: u16) -> Self {
        Self {
            stand_on,
            hit_soft: false,
        }
    }

    /// The house rule: stand on 17, including soft 17.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(17)
    }

    /// Sets whether a soft total equal to the threshold is hit.
    #[must_use]
    pub const fn with_hit_soft(mut self, hit_soft: bool) -> Self {
        self.hit_soft = hit_soft;
        self
    }
}

impl Strategy for Threshold {
    fn decide(&mut self, state: &HandState) -> Action {
        let value = state.value();
        if value > self.stand_on {
            return Action::Stand;
        }
        if value == self.stand_on && (!state.is_soft() || !self.hit_soft) {
            return Action::Stand;
        }
        Action::Hit
    }
}

/// Hits with a fixed probability, independent of the hand.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
    hit_probability: f64,
}

impl RandomStrategy {
    /// Creates a seeded random strategy.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidProbability`] if `hit_probability` is
    /// NaN or outside `0.0..=1.0`.
    pub fn new(hit_probability: f64, seed: u64) -> Result<Self, StrategyError> {
        if !(0.0..=1.0).contains(&hit_probability) {
            return Err(StrategyError::InvalidProbability);
        }
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            hit_probability,
        })
    }

    /// Returns the probability of hitting.
    #[must_use]
    pub const fn hit_probability(&self) -> f64 {
        self.hit_probability
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, _state: &HandState) -> Action {
        if self.rng.random_bool(self.hit_probability) {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Strategy backed by a closure.
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Creates a strategy that calls `f` at every decision point.
///
/// ```
/// use bjsim::{Action, Card, GameOptions, HandState, Strategy, strategy};
///
/// let mut cautious = strategy::from_fn(|state: &HandState| {
///     if state.value() < 12 { Action::Hit } else { Action::Stand }
/// });
/// let state = HandState::from_deal(GameOptions::default(), Card::Five, Card::Four, 10);
/// assert_eq!(cautious.decide(&state), Action::Hit);
/// ```
pub const fn from_fn<F: FnMut(&HandState) -> Action>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut(&HandState) -> Action> Strategy for FromFn<F> {
    fn decide(&mut self, state: &HandState) -> Action {
        (self.0)(state)
    }
}
