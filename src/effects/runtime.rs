use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info};

use crate::api::UsersApi;
use crate::config::TimingConfig;
use crate::model::{UserFields, UserId};
use crate::store::{Store, UserAction, UsersState};

use super::completion::{Completion, CompletionSender, Ticket};
use super::create::create_user;
use super::delete::DeleteQueue;
use super::dispatcher::Dispatcher;
use super::latest::{Family, LatestSlot};
use super::load::load_users;
use super::notice::Notice;
use super::update::update_user;

/// What a caller gets back from [`Runtime::spawn`].
pub struct RuntimeHandles {
    pub dispatcher: Dispatcher,
    pub state: watch::Receiver<UsersState>,
    pub notices: mpsc::UnboundedReceiver<Notice>,
    pub task: JoinHandle<()>,
}

/// Owns the store and every coordinator.
///
/// The runtime task is the single reduction point: dispatched intents and
/// coordinator results are both funnelled through it, so the store is never
/// touched from two places.
pub struct Runtime {
    store: Store,
    api: Arc<dyn UsersApi>,
    timing: TimingConfig,
    inbox: mpsc::UnboundedReceiver<UserAction>,
    completions_tx: CompletionSender,
    completions: mpsc::UnboundedReceiver<Completion>,
    notices: mpsc::UnboundedSender<Notice>,
    loads: JoinSet<()>,
    create: LatestSlot,
    update: LatestSlot,
    deletes: DeleteQueue,
}

impl Runtime {
    /// Starts the runtime on the current tokio runtime.
    pub fn spawn(api: Arc<dyn UsersApi>, timing: TimingConfig) -> RuntimeHandles {
        let (inbox_tx, inbox) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let (notices_tx, notices) = mpsc::unbounded_channel();
        let (store, state) = Store::new();
        let deletes = DeleteQueue::spawn(
            Arc::clone(&api),
            timing.delete_delay(),
            completions_tx.clone(),
        );

        let runtime = Self {
            store,
            api,
            timing,
            inbox,
            completions_tx,
            completions,
            notices: notices_tx,
            loads: JoinSet::new(),
            create: LatestSlot::new(Family::Create),
            update: LatestSlot::new(Family::Update),
            deletes,
        };

        RuntimeHandles {
            dispatcher: Dispatcher::new(inbox_tx),
            state,
            notices,
            task: tokio::spawn(runtime.run()),
        }
    }

    async fn run(mut self) {
        info!("users runtime started");
        loop {
            tokio::select! {
                action = self.inbox.recv() => match action {
                    Some(action) => self.on_dispatch(action),
                    None => break,
                },
                Some(completion) = self.completions.recv() => self.on_completion(completion),
            }
        }

        self.loads.abort_all();
        self.create.abort();
        self.update.abort();
        info!("users runtime stopped");
    }

    fn on_dispatch(&mut self, action: UserAction) {
        debug!(action = action.tag(), "dispatched");
        match &action {
            UserAction::LoadStart => self.start_load(),
            UserAction::CreateStart(fields) => self.start_create(fields.clone()),
            UserAction::UpdateStart { id, fields } => self.start_update(id.clone(), fields.clone()),
            UserAction::DeleteStart(id) => {
                if !self.deletes.enqueue(id.clone()) {
                    debug!(%id, "delete worker gone; intent dropped");
                }
            }
            _ => {}
        }
        self.apply(action);
    }

    fn on_completion(&mut self, completion: Completion) {
        if let Ticket::Latest { family, generation } = completion.ticket {
            if !self.slot(family).is_current(generation) {
                debug!(
                    action = completion.action.tag(),
                    ?family,
                    generation,
                    "discarding superseded result"
                );
                return;
            }
        }
        self.apply(completion.action);
    }

    fn apply(&mut self, action: UserAction) {
        let notice = Notice::for_action(&action);
        self.store.apply(action);
        if let Some(notice) = notice {
            // Nobody listening is fine.
            let _ = self.notices.send(notice);
        }
    }

    fn slot(&self, family: Family) -> &LatestSlot {
        match family {
            Family::Create => &self.create,
            Family::Update => &self.update,
        }
    }

    fn start_load(&mut self) {
        while self.loads.try_join_next().is_some() {}

        let api = Arc::clone(&self.api);
        let delay = self.timing.load_delay();
        let completions = self.completions_tx.clone();
        self.loads.spawn(async move {
            if let Some(action) = load_users(api.as_ref(), delay).await {
                let _ = completions.send(Completion::untracked(action));
            }
        });
    }

    fn start_create(&mut self, fields: UserFields) {
        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        self.create.spawn(move |ticket| async move {
            if let Some(action) = create_user(api.as_ref(), fields).await {
                let _ = completions.send(Completion::stamped(ticket, action));
            }
        });
    }

    fn start_update(&mut self, id: UserId, fields: UserFields) {
        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        self.update.spawn(move |ticket| async move {
            if let Some(action) = update_user(api.as_ref(), id, fields).await {
                let _ = completions.send(Completion::stamped(ticket, action));
            }
        });
    }
}
