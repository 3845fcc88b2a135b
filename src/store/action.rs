use crate::api::ApiError;
use crate::model::{User, UserFields, UserId};
use crate::mvi::Intent;

/// Every intent and result the users slice understands.
///
/// `*Start` variants are dispatched by views and picked up by the
/// coordinators; the rest are emitted by coordinators once the remote
/// call resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    LoadStart,
    LoadSuccess(Vec<User>),
    LoadError(ApiError),

    CreateStart(UserFields),
    /// Carries the created record when the server returned one.
    CreateSuccess(Option<User>),
    CreateError(ApiError),

    UpdateStart { id: UserId, fields: UserFields },
    UpdateSuccess { id: UserId, fields: UserFields },
    UpdateError(ApiError),

    DeleteStart(UserId),
    DeleteSuccess(UserId),
    DeleteError(ApiError),
}

impl Intent for UserAction {}

impl UserAction {
    /// Stable tag used in logs.
    pub fn tag(&self) -> &'static str {
        match self {
            UserAction::LoadStart => "LOAD_USERS_START",
            UserAction::LoadSuccess(_) => "LOAD_USERS_SUCCESS",
            UserAction::LoadError(_) => "LOAD_USERS_ERROR",
            UserAction::CreateStart(_) => "CREATE_USER_START",
            UserAction::CreateSuccess(_) => "CREATE_USER_SUCCESS",
            UserAction::CreateError(_) => "CREATE_USER_ERROR",
            UserAction::UpdateStart { .. } => "UPDATE_USER_START",
            UserAction::UpdateSuccess { .. } => "UPDATE_USER_SUCCESS",
            UserAction::UpdateError(_) => "UPDATE_USER_ERROR",
            UserAction::DeleteStart(_) => "DELETE_USER_START",
            UserAction::DeleteSuccess(_) => "DELETE_USER_SUCCESS",
            UserAction::DeleteError(_) => "DELETE_USER_ERROR",
        }
    }
}
