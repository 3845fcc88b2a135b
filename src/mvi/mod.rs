//! Model-View-Intent primitives shared by the store and the form.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects never live in a reducer. Remote calls are started by the
//! coordinators in [`crate::effects`], which feed their results back in as
//! intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
