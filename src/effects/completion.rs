use tokio::sync::mpsc;

use crate::store::UserAction;

use super::latest::Family;

/// Where a result action came from.
///
/// Latest-wins families stamp their results with the generation that was
/// current when the call started, so the runtime can drop superseded ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ticket {
    Untracked,
    Latest { family: Family, generation: u64 },
}

/// A result action on its way back to the runtime.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub action: UserAction,
}

impl Completion {
    pub fn untracked(action: UserAction) -> Self {
        Self {
            ticket: Ticket::Untracked,
            action,
        }
    }

    pub fn stamped(ticket: Ticket, action: UserAction) -> Self {
        Self { ticket, action }
    }
}

pub type CompletionSender = mpsc::UnboundedSender<Completion>;
