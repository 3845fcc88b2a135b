//! Terminal front end: pages, navigation, input and drawing.
//!
//! Nothing in here talks to the network. Intents go out through the
//! [`Dispatcher`](crate::effects::Dispatcher) held by [`app::App`], and
//! state comes back as store snapshots and notices.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod pages;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
