//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_limit(21)
///     .with_soft_aces(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Highest total a hand may reach without busting. Every `u8` is valid.
    pub limit: u8,
    /// Whether an ace may count as 11 when that does not bust the hand.
    pub soft_aces: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            limit: 21,
            soft_aces: true,
        }
    }
}

impl GameOptions {
    /// Sets the bust limit.
    ///
    /// Any `u8` is accepted. A hand busts once its hard sum exceeds the
    /// limit, and sums are tracked wide enough to do so even at `u8::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_limit(31);
    /// assert_eq!(options.limit, 31);
    /// ```
    #[must_use]
    pub const fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }

    /// Sets whether aces may count as 11.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_soft_aces(false);
    /// assert_eq!(options.soft_aces, false);
    /// ```
    #[must_use]
    pub const fn with_soft_aces(mut self, soft: bool) -> Self {
        self.soft_aces = soft;
        self
    }
}
