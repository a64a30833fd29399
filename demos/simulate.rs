//! Simulation example.
//!
//! `cargo run --example simulate -- [games] [seed]` pits a stand-on-15
//! player against a stand-on-17 dealer. `cargo run --example simulate --
//! interactive` plays a single hand from the terminal instead.
//! Set `RUST_LOG=debug` to see every decision.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{Action, Game, GameOptions, HandState, Simulation, Threshold, Winner, strategy};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    if first.as_deref() == Some("interactive") {
        play_interactive();
        return;
    }

    let games = first.and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut sim = Simulation::new(
        GameOptions::default(),
        Threshold::new(15),
        Threshold::dealer(),
        seed,
    );
    let stats = sim.run(games);

    println!("games:        {}", stats.games);
    println!("player wins:  {} ({:.3})", stats.player_wins, stats.player_win_rate());
    println!("dealer wins:  {} ({:.3})", stats.dealer_wins, stats.dealer_win_rate());
    println!("draws:        {} ({:.3})", stats.draws, stats.draw_rate());
    println!("player busts: {}", stats.player_busts);
    println!("dealer busts: {}", stats.dealer_busts);
}

fn play_interactive() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let player = strategy::from_fn(|state: &HandState| {
        println!(
            "Your hand: {} (value {}{}), dealer shows {}",
            format_cards(state),
            state.value(),
            if state.is_soft() { ", soft" } else { "" },
            state.opponent()
        );
        loop {
            let Some(line) = prompt_line("Hit or stand? (h/s): ") else {
                return Action::Stand;
            };
            match line.parse::<Action>() {
                Ok(action) => return action,
                Err(err) => println!("{err}"),
            }
        }
    });

    let mut game = Game::seeded(GameOptions::default(), player, Threshold::dealer(), seed);
    let info = game.play();

    println!("Your final hand: {}", format_cards(info.player_final()));
    match info.dealer_final() {
        Some(dealer) => println!("Dealer's final hand: {}", format_cards(dealer)),
        None => println!("You bust."),
    }
    match info.winner() {
        Winner::Player => println!("You win."),
        Winner::Dealer => println!("Dealer wins."),
        Winner::Draw => println!("Draw."),
    }
}

fn format_cards(state: &HandState) -> String {
    state
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads one trimmed line; `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
