//! Multi-game simulation and outcome statistics.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::game::{Game, GameState};
use crate::options::GameOptions;
use crate::result::{GameInfo, Winner};
use crate::strategy::Strategy;

/// Tally of game outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Games played.
    pub games: u64,
    /// Games won by the player.
    pub player_wins: u64,
    /// Games won by the dealer.
    pub dealer_wins: u64,
    /// Games drawn at showdown.
    pub draws: u64,
    /// Games the player lost by busting.
    pub player_busts: u64,
    /// Games the dealer lost by busting.
    pub dealer_busts: u64,
}

impl SimulationStats {
    /// Adds one finished game to the tally.
    pub const fn record(&mut self, info: &GameInfo) {
        self.games += 1;
        match info.winner() {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Draw => self.draws += 1,
        }
        match info.end_state() {
            GameState::PlayerBust => self.player_busts += 1,
            GameState::DealerBust => self.dealer_busts += 1,
            _ => {}
        }
    }

    /// Combines two tallies.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            player_wins: self.player_wins + other.player_wins,
            dealer_wins: self.dealer_wins + other.dealer_wins,
            draws: self.draws + other.draws,
            player_busts: self.player_busts + other.player_busts,
            dealer_busts: self.dealer_busts + other.dealer_busts,
        }
    }

    /// Fraction of games won by the player.
    #[must_use]
    pub fn player_win_rate(&self) -> f64 {
        self.rate(self.player_wins)
    }

    /// Fraction of games won by the dealer.
    #[must_use]
    pub fn dealer_win_rate(&self) -> f64 {
        self.rate(self.dealer_wins)
    }

    /// Fraction of games drawn.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for game counts"
    )]
    fn rate(&self, count: u64) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 / self.games as f64
    }
}

/// Plays many independent games between two strategies.
///
/// Every game draws from its own [`Deck`], seeded from the simulation's
/// master generator, so a run is reproducible from its seed while games stay
/// uncorrelated.
#[derive(Debug, Clone)]
pub struct Simulation<P, D> {
    /// Game options.
    options: GameOptions,
    /// Player strategy, shared across games.
    player: P,
    /// Dealer strategy, shared across games.
    dealer: D,
    /// Source of per-game seeds.
    rng: ChaCha8Rng,
}

impl<P: Strategy, D: Strategy> Simulation<P, D> {
    /// Creates a simulation with the given master seed.
    #[must_use]
    pub fn new(options: GameOptions, player: P, dealer: D, seed: u64) -> Self {
        Self {
            options,
            player,
            dealer,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays one game on a freshly seeded deck.
    pub fn play_one(&mut self) -> GameInfo {
        let deck = Deck::new(self.rng.next_u64());
        Game::new(self.options, &mut self.player, &mut self.dealer, deck).play()
    }

    /// Plays `games` games and returns the tally.
    pub fn run(&mut self, games: u64) -> SimulationStats {
        log::info!("simulating {games} games");
        let mut stats = SimulationStats::default();
        for _ in 0..games {
            let info = self.play_one();
            stats.record(&info);
        }
        log::info!(
            "player {} / dealer {} / draw {} over {} games",
            stats.player_wins,
            stats.dealer_wins,
            stats.draws,
            stats.games
        );
        stats
    }
}
