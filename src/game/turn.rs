use crate::action::Action;
use crate::deck::CardSource;
use crate::hand::HandState;
use crate::strategy::Strategy;

/// Plays out one side's hand.
///
/// Before every decision `on_decision` sees the current state, then the
/// strategy is asked for an action. A hit draws from `source` and moves to
/// the new state; a stand ends the turn with the state unchanged. The turn
/// also ends as soon as the hand busts, without consulting the strategy
/// again. A hand that is already bust is returned as is.
///
/// Terminates because every card raises the hard sum by at least one.
pub fn run_turn<C, S, F>(
    source: &mut C,
    initial: HandState,
    strategy: &mut S,
    mut on_decision: F,
) -> HandState
where
    C: CardSource + ?Sized,
    S: Strategy + ?Sized,
    F: FnMut(&HandState),
{
    let mut state = initial;

    while !state.is_bust() {
        on_decision(&state);
        match strategy.decide(&state) {
            Action::Stand => {
                log::debug!("stand on {} ({} cards)", state.value(), state.len());
                break;
            }
            Action::Hit => {
                let card = source.next_card();
                state = state.with_card(card);
                log::debug!("hit {card} -> {}", state.value());
            }
        }
    }

    if state.is_bust() {
        log::debug!("bust with {}", state.sum());
    }

    state
}
