use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::UsersApi;
use crate::model::UserId;
use crate::store::UserAction;

use super::completion::{Completion, CompletionSender};

pub async fn delete_user(api: &dyn UsersApi, id: UserId, delay: Duration) -> Option<UserAction> {
    match api.delete(&id).await {
        Ok(response) if response.is_ok() => {
            tokio::time::sleep(delay).await;
            Some(UserAction::DeleteSuccess(id))
        }
        Ok(response) => {
            warn!(status = response.status, %id, "delete answered without 200; nothing emitted");
            None
        }
        Err(err) => {
            warn!(error = %err, %id, "delete failed");
            Some(UserAction::DeleteError(err))
        }
    }
}

/// FIFO queue drained by a single worker.
///
/// The worker finishes one delete (including the success pause) before it
/// takes the next id, so at most one delete is ever in flight and the server
/// sees them in arrival order. Queued ids are deferred, never dropped.
#[derive(Debug)]
pub struct DeleteQueue {
    sender: mpsc::UnboundedSender<UserId>,
    worker: JoinHandle<()>,
}

impl DeleteQueue {
    pub fn spawn(api: Arc<dyn UsersApi>, delay: Duration, completions: CompletionSender) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<UserId>();
        let worker = tokio::spawn(async move {
            while let Some(id) = receiver.recv().await {
                debug!(%id, "delete dequeued");
                let Some(action) = delete_user(api.as_ref(), id, delay).await else {
                    continue;
                };
                if completions.send(Completion::untracked(action)).is_err() {
                    break;
                }
            }
        });

        Self { sender, worker }
    }

    /// Returns `false` once the worker has stopped.
    pub fn enqueue(&self, id: UserId) -> bool {
        self.sender.send(id).is_ok()
    }
}

impl Drop for DeleteQueue {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
