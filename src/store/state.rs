use crate::model::{User, UserId};
use crate::mvi::State;

/// The users slice: the loaded list plus request flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
    /// Set by any failed call; cleared only by a successful load.
    pub error: Option<String>,
}

impl State for UsersState {}

impl UsersState {
    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| &user.id == id)
    }
}
