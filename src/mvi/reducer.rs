use super::intent::Intent;
use super::state::State;

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: State;

    type Intent: Intent;

    /// Must be pure; the caller performs any side effect around the call.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
