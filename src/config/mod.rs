//! Configuration loaded from `config.toml` with per-field defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, TimingConfig, UiConfig};
