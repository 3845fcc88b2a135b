use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

use super::completion::Ticket;

/// Intent families that run latest-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Create,
    Update,
}

/// Holds the single live task of a latest-wins family.
///
/// Starting a new task detaches the previous handle and bumps the
/// generation. The superseded request still runs to completion against the
/// server; its result carries an old generation and is rejected by
/// [`LatestSlot::is_current`].
#[derive(Debug)]
pub struct LatestSlot {
    family: Family,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl LatestSlot {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            generation: 0,
            handle: None,
        }
    }

    /// Replaces the live task with the one built by `make`.
    pub fn spawn<F, Fut>(&mut self, make: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Dropping the handle detaches the task.
        if let Some(previous) = self.handle.take() {
            if !previous.is_finished() {
                debug!(
                    family = ?self.family,
                    generation = self.generation,
                    "superseding in-flight task"
                );
            }
        }

        self.generation += 1;
        let ticket = Ticket::Latest {
            family: self.family,
            generation: self.generation,
        };
        self.handle = Some(tokio::spawn(make(ticket)));
        ticket
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Stops the live task. Used on shutdown only.
    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for LatestSlot {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn superseded_task_still_runs_to_completion() {
        let mut slot = LatestSlot::new(Family::Create);
        let (first_tx, first_rx) = oneshot::channel();

        let first = slot.spawn(move |ticket| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = first_tx.send(ticket);
        });
        slot.spawn(|_| async {});

        assert_eq!(first_rx.await.unwrap(), first);
        let Ticket::Latest { generation, .. } = first else {
            panic!("latest slots hand out stamped tickets");
        };
        assert!(!slot.is_current(generation));
    }

    #[tokio::test]
    async fn abort_stops_live_task() {
        let mut slot = LatestSlot::new(Family::Update);
        let (tx, rx) = oneshot::channel::<()>();
        slot.spawn(move |_| async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            let _ = tx.send(());
        });
        slot.abort();
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn only_latest_generation_is_current() {
        let mut slot = LatestSlot::new(Family::Update);
        let first = slot.spawn(|_| async {});
        let second = slot.spawn(|_| async {});

        let (Ticket::Latest { generation: g1, family }, Ticket::Latest { generation: g2, .. }) =
            (first, second)
        else {
            panic!("latest slots hand out stamped tickets");
        };
        assert_eq!(family, Family::Update);
        assert!(!slot.is_current(g1));
        assert!(slot.is_current(g2));
    }

    #[tokio::test]
    async fn ticket_is_passed_to_task() {
        let mut slot = LatestSlot::new(Family::Create);
        let (tx, rx) = oneshot::channel();
        let ticket = slot.spawn(move |ticket| async move {
            let _ = tx.send(ticket);
        });
        assert_eq!(rx.await.unwrap(), ticket);
    }
}
