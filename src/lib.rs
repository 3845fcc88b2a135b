pub mod api;
pub mod config;
pub mod effects;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod store;
pub mod ui;
