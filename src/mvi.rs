//! Intent/reducer primitives.
//!
//! A state machine is a value type plus a pure `reduce` step. Side effects
//! (timers, observers, painting) live in whoever owns the state.
//!
//! ```text
//! Intent ──→ Reducer::reduce(State, Intent) ──→ State
//! ```

/// Input to a reducer: a user command or a timer firing.
pub trait Intent: Send + 'static {}

/// Value owned by a single reducer.
///
/// `Default` lets owners move the state out with `mem::take` while reducing.
pub trait ReducerState: Clone + PartialEq + Default + Send + 'static {}

pub trait Reducer {
    type State: ReducerState;
    type Intent: Intent;

    /// Must not touch anything but its arguments.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
