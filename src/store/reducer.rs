use crate::mvi::Reducer;

use super::action::UserAction;
use super::state::UsersState;

/// Reducer for the users slice.
///
/// Start intents only touch the `loading` flag for loads; create, update
/// and delete starts leave the slice alone until their result arrives.
pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UserAction;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserAction::LoadStart => {
                state.loading = true;
            }
            UserAction::LoadSuccess(users) => {
                state.users = users;
                state.loading = false;
                state.error = None;
            }
            UserAction::CreateSuccess(Some(user)) => {
                // The server owns ids; a repeat id replaces rather than duplicates.
                match state.position(&user.id) {
                    Some(index) => state.users[index] = user,
                    None => state.users.push(user),
                }
                state.loading = false;
            }
            UserAction::CreateSuccess(None) => {
                state.loading = false;
            }
            UserAction::UpdateSuccess { id, fields } => {
                if let Some(index) = state.position(&id) {
                    state.users[index].fields = fields;
                }
                state.loading = false;
            }
            UserAction::DeleteSuccess(id) => {
                state.users.retain(|user| user.id != id);
                state.loading = false;
            }
            UserAction::LoadError(err)
            | UserAction::CreateError(err)
            | UserAction::UpdateError(err)
            | UserAction::DeleteError(err) => {
                state.loading = false;
                state.error = Some(err.payload());
            }
            UserAction::CreateStart(_)
            | UserAction::UpdateStart { .. }
            | UserAction::DeleteStart(_) => {}
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::{User, UserFields, UserId};
    use serde_json::json;

    fn user(id: u64, name: &str) -> User {
        User::new(
            id,
            UserFields {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "0123456789".to_string(),
                address: "Somewhere".to_string(),
            },
        )
    }

    fn loaded(users: Vec<User>) -> UsersState {
        UsersReducer::reduce(UsersState::default(), UserAction::LoadSuccess(users))
    }

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = UsersState::default();
        assert!(state.users.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn load_start_sets_loading() {
        let state = UsersReducer::reduce(UsersState::default(), UserAction::LoadStart);
        assert!(state.loading);
    }

    #[test]
    fn load_success_replaces_list_in_order() {
        let mut state = loaded(vec![user(9, "Old")]);
        state = UsersReducer::reduce(state, UserAction::LoadStart);
        let list = vec![user(2, "B"), user(1, "A")];
        state = UsersReducer::reduce(state, UserAction::LoadSuccess(list.clone()));
        assert_eq!(state.users, list);
        assert!(!state.loading);
    }

    #[test]
    fn load_success_is_idempotent() {
        let list = vec![user(1, "A"), user(2, "B")];
        let once = loaded(list.clone());
        let twice = UsersReducer::reduce(once.clone(), UserAction::LoadSuccess(list));
        assert_eq!(once, twice);
    }

    #[test]
    fn load_success_clears_previous_error() {
        let state = UsersReducer::reduce(
            UsersState::default(),
            UserAction::DeleteError(ApiError::Transport("down".to_string())),
        );
        assert_eq!(state.error.as_deref(), Some("down"));
        let state = UsersReducer::reduce(state, UserAction::LoadSuccess(vec![]));
        assert!(state.error.is_none());
    }

    #[test]
    fn error_keeps_server_payload_and_stops_loading() {
        let state = UsersReducer::reduce(UsersState::default(), UserAction::LoadStart);
        let state = UsersReducer::reduce(
            state,
            UserAction::LoadError(ApiError::Response {
                status: 500,
                data: json!("Internal Server Error"),
            }),
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn create_success_with_record_appends() {
        let state = loaded(vec![user(1, "A")]);
        let state = UsersReducer::reduce(state, UserAction::CreateSuccess(Some(user(2, "B"))));
        let names: Vec<_> = state.users.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn create_success_with_known_id_replaces() {
        let state = loaded(vec![user(1, "A")]);
        let state = UsersReducer::reduce(state, UserAction::CreateSuccess(Some(user(1, "Z"))));
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].name(), "Z");
    }

    #[test]
    fn create_success_without_record_leaves_list() {
        let state = loaded(vec![user(1, "A")]);
        let next = UsersReducer::reduce(state.clone(), UserAction::CreateSuccess(None));
        assert_eq!(next.users, state.users);
    }

    #[test]
    fn update_success_replaces_in_place() {
        let state = loaded(vec![user(1, "A"), user(2, "B"), user(3, "C")]);
        let fields = user(0, "Bee").fields;
        let state = UsersReducer::reduce(
            state,
            UserAction::UpdateSuccess {
                id: UserId::from(2),
                fields: fields.clone(),
            },
        );
        assert_eq!(state.users[1].id, UserId::from(2));
        assert_eq!(state.users[1].fields, fields);
        assert_eq!(state.users.len(), 3);
    }

    #[test]
    fn update_success_for_unknown_id_is_noop() {
        let state = loaded(vec![user(1, "A")]);
        let next = UsersReducer::reduce(
            state.clone(),
            UserAction::UpdateSuccess {
                id: UserId::from(42),
                fields: UserFields::default(),
            },
        );
        assert_eq!(next.users, state.users);
    }

    #[test]
    fn delete_success_removes_entry() {
        let state = loaded(vec![user(1, "A"), user(2, "B")]);
        let state = UsersReducer::reduce(state, UserAction::DeleteSuccess(UserId::from(1)));
        assert_eq!(state.users, vec![user(2, "B")]);
    }

    #[test]
    fn start_intents_do_not_touch_list() {
        let state = loaded(vec![user(1, "A")]);
        for action in [
            UserAction::CreateStart(UserFields::default()),
            UserAction::UpdateStart {
                id: UserId::from(1),
                fields: UserFields::default(),
            },
            UserAction::DeleteStart(UserId::from(1)),
        ] {
            assert_eq!(UsersReducer::reduce(state.clone(), action), state);
        }
    }
}
