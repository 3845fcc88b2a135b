//! The users slice and its owner.
//!
//! [`Store`] is held by exactly one task (the effects runtime). Everyone
//! else sees read-only snapshots through a `watch` channel.

mod action;
mod reducer;
mod state;

use tokio::sync::watch;
use tracing::debug;

use crate::mvi::Reducer;

pub use action::UserAction;
pub use reducer::UsersReducer;
pub use state::UsersState;

pub struct Store {
    state: UsersState,
    snapshots: watch::Sender<UsersState>,
}

impl Store {
    pub fn new() -> (Self, watch::Receiver<UsersState>) {
        let (snapshots, receiver) = watch::channel(UsersState::default());
        (
            Self {
                state: UsersState::default(),
                snapshots,
            },
            receiver,
        )
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    /// Reduces `action` into the slice and publishes the result if it changed.
    pub fn apply(&mut self, action: UserAction) -> &UsersState {
        let tag = action.tag();
        self.state = UsersReducer::reduce(std::mem::take(&mut self.state), action);

        let state = &self.state;
        let published = self.snapshots.send_if_modified(|current| {
            if current == state {
                return false;
            }
            *current = state.clone();
            true
        });
        debug!(action = tag, published, users = state.users.len(), "applied");

        &self.state
    }
}
