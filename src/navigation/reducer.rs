//! Reducer for slide navigation.

use crate::mvi::Reducer;

use super::intent::NavigationIntent;
use super::state::{NavigationState, TransitionPhase};

/// Pure transition function of the navigation state machine.
///
/// Scheduling the settle timer and notifying observers happen around the
/// dispatch, in [`Navigator`](super::Navigator).
pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Move(command) => {
                if state.is_transitioning() {
                    return state;
                }
                match state.target_of(command) {
                    Some(target) => state.begin_transition(target),
                    None => state,
                }
            }
            NavigationIntent::Settle(ticket) => match state.phase() {
                TransitionPhase::Transitioning { ticket: pending } if pending == ticket => {
                    state.settled()
                }
                _ => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::intent::NavCommand;
    use crate::navigation::state::SettleTicket;

    fn moved(state: NavigationState, command: NavCommand) -> NavigationState {
        NavigationReducer::reduce(state, NavigationIntent::Move(command))
    }

    #[test]
    fn next_from_idle_enters_transitioning() {
        let state = moved(NavigationState::new(3), NavCommand::Next);
        assert_eq!(state.current(), 1);
        assert!(state.is_transitioning());
    }

    #[test]
    fn move_while_transitioning_is_dropped() {
        let state = moved(NavigationState::new(3), NavCommand::Next);
        let again = moved(state.clone(), NavCommand::Next);
        assert_eq!(again, state);
        let jump = moved(state.clone(), NavCommand::JumpTo(0));
        assert_eq!(jump, state);
    }

    #[test]
    fn matching_settle_releases_lock() {
        let state = moved(NavigationState::new(3), NavCommand::Next);
        let state = NavigationReducer::reduce(state, NavigationIntent::Settle(SettleTicket(1)));
        assert!(!state.is_transitioning());
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let state = moved(NavigationState::new(3), NavCommand::Next);
        let state = NavigationReducer::reduce(state, NavigationIntent::Settle(SettleTicket(7)));
        assert!(state.is_transitioning());
    }

    #[test]
    fn settle_while_idle_is_noop() {
        let state = NavigationState::new(3);
        let after = NavigationReducer::reduce(state.clone(), NavigationIntent::Settle(SettleTicket(1)));
        assert_eq!(after, state);
    }

    #[test]
    fn previous_at_start_stays_idle() {
        let state = moved(NavigationState::new(3), NavCommand::Previous);
        assert_eq!(state.current(), 0);
        assert!(!state.is_transitioning());
    }
}
