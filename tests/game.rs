//! Game integration tests.

use std::cell::Cell;

use bjsim::{
    Action, Always, Card, CardSource, DeckError, Game, GameOptions, GameState, HandState,
    HandStatus, ParseActionError, ParseCardError, RandomStrategy, Stacked, Strategy,
    StrategyError, Threshold, Winner, deck, run_turn, strategy,
};

fn stacked(cards: &str) -> Stacked {
    cards.parse().unwrap()
}

fn deal(first: Card, second: Card) -> HandState {
    HandState::from_deal(GameOptions::default(), first, second, 10)
}

fn refuse_to_play() -> impl Strategy {
    strategy::from_fn(|_: &HandState| -> Action { panic!("dealer must not play") })
}

#[test]
fn hand_from_deal_sums_card_points() {
    let hand = deal(Card::King, Card::Seven);
    assert_eq!(hand.sum(), 17);
    assert_eq!(hand.value(), 17);
    assert!(!hand.is_soft());
    assert_eq!(hand.cards(), &[Card::King, Card::Seven]);
    assert_eq!(hand.opponent(), 10);
    assert_eq!(hand.status(), HandStatus::Live);

    let hand = deal(Card::Five, Card::Nine);
    assert_eq!(
        hand.sum(),
        u16::from(Card::Five.points() + Card::Nine.points())
    );
}

#[test]
fn aces_count_high_when_they_fit() {
    let soft = deal(Card::Ace, Card::Six);
    assert_eq!(soft.sum(), 7);
    assert_eq!(soft.value(), 17);
    assert!(soft.is_soft());

    let natural = deal(Card::Ace, Card::King);
    assert_eq!(natural.value(), 21);

    let pair = deal(Card::Ace, Card::Ace);
    assert_eq!(pair.sum(), 2);
    assert_eq!(pair.value(), 12);

    let hardened = soft.with_card(Card::Ten);
    assert_eq!(hardened.sum(), 17);
    assert_eq!(hardened.value(), 17);
    assert!(!hardened.is_soft());
}

#[test]
fn soft_aces_can_be_disabled() {
    let options = GameOptions::default().with_soft_aces(false);
    let hand = HandState::from_deal(options, Card::Ace, Card::Six, 10);
    assert_eq!(hand.value(), 7);
    assert!(!hand.is_soft());
}

#[test]
fn with_card_leaves_original_untouched() {
    let hand = deal(Card::Two, Card::Three);
    let next = hand.with_card(Card::Four);
    assert_eq!(hand.sum(), 5);
    assert_eq!(hand.len(), 2);
    assert_eq!(next.sum(), 9);
    assert_eq!(next.cards(), &[Card::Two, Card::Three, Card::Four]);
}

#[test]
fn bust_is_terminal() {
    let bust = deal(Card::King, Card::Queen).with_card(Card::Two);
    assert_eq!(bust.sum(), 22);
    assert!(bust.is_bust());
    assert_eq!(bust.status(), HandStatus::Bust);

    let after = bust.with_card(Card::Five);
    assert_eq!(after, bust);
}

#[test]
fn card_symbols_parse_and_display() {
    assert_eq!("A".parse::<Card>(), Ok(Card::Ace));
    assert_eq!("10".parse::<Card>(), Ok(Card::Ten));
    assert_eq!("t".parse::<Card>(), Ok(Card::Ten));
    assert_eq!(" q ".parse::<Card>(), Ok(Card::Queen));
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("Z".parse::<Card>(), Err(ParseCardError::UnknownRank));

    for card in Card::ALL {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
}

#[test]
fn actions_parse_and_reject_unknown_input() {
    assert_eq!("h".parse::<Action>(), Ok(Action::Hit));
    assert_eq!("HIT".parse::<Action>(), Ok(Action::Hit));
    assert_eq!("s".parse::<Action>(), Ok(Action::Stand));
    assert_eq!("Stick".parse::<Action>(), Ok(Action::Stand));
    assert_eq!(
        "double".parse::<Action>(),
        Err(ParseActionError::UnknownAction)
    );
}

#[test]
fn stacked_source_cycles_and_validates() {
    assert_eq!(Stacked::new(Vec::<Card>::new()).unwrap_err(), DeckError::Empty);
    assert_eq!(
        "K X".parse::<Stacked>().unwrap_err(),
        DeckError::Card(ParseCardError::UnknownRank)
    );

    let mut source = stacked("K 7 A");
    let drawn: Vec<Card> = (0..4).map(|_| source.next_card()).collect();
    assert_eq!(drawn, [Card::King, Card::Seven, Card::Ace, Card::King]);
    assert_eq!(source.dealt(), 4);
}

#[test]
fn seeded_decks_repeat_and_cover_every_rank() {
    let mut a = bjsim::Deck::new(3);
    let mut b = bjsim::Deck::new(3);
    let draws: Vec<Card> = (0..1000).map(|_| a.next_card()).collect();
    let again: Vec<Card> = (0..1000).map(|_| b.next_card()).collect();
    assert_eq!(draws, again);

    for card in Card::ALL {
        assert!(draws.contains(&card), "{card} never drawn");
    }
}

#[test]
fn turn_stops_after_initial_deal() {
    let mut source = deck::from_fn(|| Card::Two);
    let initial = deal(Card::Five, Card::Six);
    let mut calls = 0;

    let result = run_turn(&mut source, initial.clone(), &mut Always(Action::Stand), |state| {
        calls += 1;
        assert_eq!(state, &initial);
    });

    assert_eq!(calls, 1);
    assert_eq!(result, initial);
}

#[test]
fn turn_hits_until_threshold() {
    let mut source = stacked("2 3 4");
    let initial = deal(Card::Five, Card::Five);
    let mut seen = Vec::new();

    let result = run_turn(&mut source, initial, &mut Threshold::new(15), |state| {
        seen.push(state.value());
    });

    assert_eq!(seen, [10, 12, 15]);
    assert_eq!(result.value(), 15);
    assert_eq!(result.len(), 4);
    assert_eq!(source.dealt(), 2);
}

#[test]
fn turn_ends_on_bust_without_asking_again() {
    let mut source = deck::from_fn(|| Card::King);
    let asked = Cell::new(0);
    let mut always_hit = strategy::from_fn(|_: &HandState| {
        asked.set(asked.get() + 1);
        Action::Hit
    });

    let result = run_turn(&mut source, deal(Card::Ten, Card::Two), &mut always_hit, |_| {});

    assert!(result.is_bust());
    assert_eq!(result.sum(), 22);
    assert_eq!(asked.get(), 1);
}

#[test]
fn turn_on_bust_hand_draws_nothing() {
    let options = GameOptions::default().with_limit(10);
    let initial = HandState::from_deal(options, Card::King, Card::Queen, 0);
    assert!(initial.is_bust());

    let draws = Cell::new(0);
    let mut source = deck::from_fn(|| {
        draws.set(draws.get() + 1);
        Card::Two
    });
    let mut calls = 0;

    let result = run_turn(&mut source, initial.clone(), &mut Always(Action::Hit), |_| {
        calls += 1;
    });

    assert_eq!(result, initial);
    assert_eq!(calls, 0);
    assert_eq!(draws.get(), 0);
}

#[test]
fn turn_busts_at_highest_limit() {
    let options = GameOptions::default().with_limit(u8::MAX);
    let initial = HandState::from_deal(options, Card::King, Card::King, 0);
    let draws = Cell::new(0);
    let mut source = deck::from_fn(|| {
        draws.set(draws.get() + 1);
        assert!(draws.get() <= 1000, "hand never went bust");
        Card::King
    });

    let result = run_turn(&mut source, initial, &mut Always(Action::Hit), |_| {});

    assert!(result.is_bust());
    assert_eq!(result.sum(), 260);
    assert_eq!(draws.get(), 24);
}

#[test]
fn player_bust_ends_game_before_dealer_plays() {
    let mut game = Game::new(
        GameOptions::default(),
        Always(Action::Hit),
        refuse_to_play(),
        deck::from_fn(|| Card::King),
    );

    let info = game.play();

    assert_eq!(info.winner(), Winner::Dealer);
    assert_eq!(info.end_state(), GameState::PlayerBust);
    assert_eq!(game.state(), GameState::PlayerBust);
    assert!(info.player_final().is_bust());
    assert_eq!(info.player_log().len(), 1);
    assert!(info.dealer_log().is_empty());
    assert!(info.dealer_final().is_none());
}

#[test]
fn dealer_bust_gives_player_the_win() {
    // player 10 8, dealer 10 6, dealer draws 10
    let mut game = Game::new(
        GameOptions::default(),
        Threshold::new(17),
        Threshold::dealer(),
        stacked("10 8 10 6 10"),
    );

    let info = game.play();

    assert_eq!(info.winner(), Winner::Player);
    assert_eq!(info.end_state(), GameState::DealerBust);
    assert_eq!(info.player_log()[0].opponent(), 10);
    assert_eq!(info.dealer_log().len(), 1);
    assert_eq!(info.dealer_log()[0].opponent(), 18);
    assert_eq!(info.dealer_final().map(HandState::sum), Some(26));
}

#[test]
fn showdown_compares_final_values() {
    let cases = [
        ("10 10 10 9", Winner::Player),
        ("10 7 10 7", Winner::Draw),
        ("10 6 10 9", Winner::Dealer),
    ];

    for (cards, expected) in cases {
        let mut game = Game::new(
            GameOptions::default(),
            Always(Action::Stand),
            Threshold::dealer(),
            stacked(cards),
        );
        let info = game.play();
        assert_eq!(info.winner(), expected, "deal {cards}");
        assert_eq!(info.end_state(), GameState::Showdown);
        assert_eq!(info.player_log().len(), 1);
        assert_eq!(info.dealer_log().len(), 1);
    }
}

#[test]
fn dealer_ace_shows_as_eleven() {
    let mut game = Game::new(
        GameOptions::default(),
        Always(Action::Stand),
        Threshold::dealer(),
        stacked("10 8 A 9"),
    );

    let info = game.play();

    assert_eq!(info.player_log()[0].opponent(), 11);
    assert_eq!(info.dealer_final().map(HandState::value), Some(20));
    assert_eq!(info.winner(), Winner::Dealer);
}

#[test]
fn winner_table() {
    let cases = [
        (20, 18, Winner::Player),
        (17, 17, Winner::Draw),
        (16, 19, Winner::Dealer),
        (21, 4, Winner::Player),
    ];
    for (player, dealer, expected) in cases {
        assert_eq!(Winner::showdown(player, dealer), expected);
    }
}

#[test]
fn game_states_terminal() {
    assert!(!GameState::Dealing.is_terminal());
    assert!(!GameState::PlayerTurn.is_terminal());
    assert!(!GameState::DealerTurn.is_terminal());
    assert!(GameState::PlayerBust.is_terminal());
    assert!(GameState::DealerBust.is_terminal());
    assert!(GameState::Showdown.is_terminal());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default().with_limit(31).with_soft_aces(false);
    assert_eq!(options.limit, 31);
    assert!(!options.soft_aces);

    let defaults = GameOptions::default();
    assert_eq!(defaults.limit, 21);
    assert!(defaults.soft_aces);
}

#[test]
fn threshold_soft_rule() {
    let soft_17 = deal(Card::Ace, Card::Six);
    let hard_17 = deal(Card::Ten, Card::Seven);

    assert_eq!(Threshold::dealer().decide(&soft_17), Action::Stand);
    let mut hits_soft = Threshold::dealer().with_hit_soft(true);
    assert_eq!(hits_soft.decide(&soft_17), Action::Hit);
    assert_eq!(hits_soft.decide(&hard_17), Action::Stand);
    assert_eq!(hits_soft.decide(&deal(Card::Ten, Card::Six)), Action::Hit);
}

#[test]
fn random_strategy_validates_probability() {
    for p in [-0.1, 1.5, f64::NAN] {
        assert_eq!(
            RandomStrategy::new(p, 1).unwrap_err(),
            StrategyError::InvalidProbability
        );
    }

    let state = deal(Card::Two, Card::Three);
    let mut never = RandomStrategy::new(0.0, 1).unwrap();
    let mut always = RandomStrategy::new(1.0, 1).unwrap();
    for _ in 0..20 {
        assert_eq!(never.decide(&state), Action::Stand);
        assert_eq!(always.decide(&state), Action::Hit);
    }
}

#[test]
fn boxed_strategies_drive_a_game() {
    let player: Box<dyn Strategy> = Box::new(Threshold::new(12));
    let dealer: Box<dyn Strategy> = Box::new(Threshold::dealer());
    let mut game = Game::seeded(GameOptions::default(), player, dealer, 9);

    let info = game.play();
    assert!(info.end_state().is_terminal());
    assert!(!info.player_log().is_empty());
}
