use tracing::warn;

use crate::api::UsersApi;
use crate::model::{UserFields, UserId};
use crate::store::UserAction;

pub async fn update_user(api: &dyn UsersApi, id: UserId, fields: UserFields) -> Option<UserAction> {
    match api.update(&id, &fields).await {
        Ok(response) if response.is_ok() => Some(UserAction::UpdateSuccess { id, fields }),
        Ok(response) => {
            warn!(status = response.status, %id, "update answered without 200; nothing emitted");
            None
        }
        Err(err) => {
            warn!(error = %err, %id, "update failed");
            Some(UserAction::UpdateError(err))
        }
    }
}
