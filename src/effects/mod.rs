//! Side-effect coordination for the users slice.
//!
//! Each intent family has its own discipline:
//!
//! | Family | Discipline |
//! |--------|------------|
//! | load   | fan-out: every start runs, last completion wins |
//! | create | latest-wins: a new start supersedes the in-flight one |
//! | update | latest-wins |
//! | delete | FIFO: one worker, one request in flight |
//!
//! Coordinators never touch the store. They hand result actions back to
//! the [`Runtime`], which reduces them in arrival order. There is no
//! timeout or retry here; a hung call parks its coordinator.

mod completion;
mod create;
mod delete;
mod dispatcher;
mod latest;
mod load;
mod notice;
mod runtime;
mod update;

pub use completion::{Completion, CompletionSender, Ticket};
pub use create::create_user;
pub use delete::{delete_user, DeleteQueue};
pub use dispatcher::{Dispatcher, RuntimeError};
pub use latest::{Family, LatestSlot};
pub use load::load_users;
pub use notice::{Notice, NoticeLevel};
pub use runtime::{Runtime, RuntimeHandles};
pub use update::update_user;
