use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the users API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; requests go to `{base_url}/users` (default: http://localhost:5000).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Fixed pauses used for UX smoothing. None of them bound a remote call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Pause between a successful list call and publishing it (default: 500).
    #[serde(default = "default_pause_ms")]
    pub load_delay_ms: u64,
    /// Pause between a successful delete call and removing the row (default: 500).
    #[serde(default = "default_pause_ms")]
    pub delete_delay_ms: u64,
    /// Pause between submitting the form and returning to the list (default: 500).
    #[serde(default = "default_pause_ms")]
    pub navigate_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen in milliseconds (default: 3000).
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_pause_ms() -> u64 {
    500
}

fn default_tick_rate() -> u64 {
    250
}

fn default_toast_ms() -> u64 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_pause_ms(),
            delete_delay_ms: default_pause_ms(),
            navigate_delay_ms: default_pause_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl TimingConfig {
    /// All pauses set to zero; handy for tests and scripted runs.
    pub fn immediate() -> Self {
        Self {
            load_delay_ms: 0,
            delete_delay_ms: 0,
            navigate_delay_ms: 0,
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn navigate_delay(&self) -> Duration {
        Duration::from_millis(self.navigate_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
