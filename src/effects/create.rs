use tracing::warn;

use crate::api::UsersApi;
use crate::model::UserFields;
use crate::store::UserAction;

pub async fn create_user(api: &dyn UsersApi, fields: UserFields) -> Option<UserAction> {
    match api.create(&fields).await {
        Ok(response) if response.is_ok() => Some(UserAction::CreateSuccess(response.data)),
        Ok(response) => {
            warn!(status = response.status, "create answered without 200; nothing emitted");
            None
        }
        Err(err) => {
            warn!(error = %err, "create failed");
            Some(UserAction::CreateError(err))
        }
    }
}
