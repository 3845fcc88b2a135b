use std::time::Duration;

use tracing::warn;

use crate::api::UsersApi;
use crate::store::UserAction;

/// Fetches the full list. Every `LoadStart` gets its own call; nothing is
/// de-duplicated, so overlapping loads resolve in completion order.
///
/// Returns `None` when the server answered 2xx but not 200.
pub async fn load_users(api: &dyn UsersApi, delay: Duration) -> Option<UserAction> {
    match api.list().await {
        Ok(response) if response.is_ok() => {
            tokio::time::sleep(delay).await;
            Some(UserAction::LoadSuccess(response.data))
        }
        Ok(response) => {
            warn!(status = response.status, "list answered without 200; nothing emitted");
            None
        }
        Err(err) => {
            warn!(error = %err, "list failed");
            Some(UserAction::LoadError(err))
        }
    }
}
