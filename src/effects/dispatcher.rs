use thiserror::Error;
use tokio::sync::mpsc;

use crate::model::{UserFields, UserId};
use crate::store::UserAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("runtime stopped; {0} was not dispatched")]
    Closed(&'static str),
}

/// Cloneable entry point into the runtime.
///
/// Dispatch never blocks; the runtime is gone once every dispatcher has
/// been dropped.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    inbox: mpsc::UnboundedSender<UserAction>,
}

impl Dispatcher {
    pub(crate) fn new(inbox: mpsc::UnboundedSender<UserAction>) -> Self {
        Self { inbox }
    }

    pub fn dispatch(&self, action: UserAction) -> Result<(), RuntimeError> {
        let tag = action.tag();
        self.inbox.send(action).map_err(|_| RuntimeError::Closed(tag))
    }

    pub fn load_users(&self) -> Result<(), RuntimeError> {
        self.dispatch(UserAction::LoadStart)
    }

    pub fn create_user(&self, fields: UserFields) -> Result<(), RuntimeError> {
        self.dispatch(UserAction::CreateStart(fields))
    }

    pub fn update_user(&self, id: UserId, fields: UserFields) -> Result<(), RuntimeError> {
        self.dispatch(UserAction::UpdateStart { id, fields })
    }

    pub fn delete_user(&self, id: UserId) -> Result<(), RuntimeError> {
        self.dispatch(UserAction::DeleteStart(id))
    }
}
