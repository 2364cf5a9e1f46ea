use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_USERS_URL;
use crate::store::ViewMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning the JSON array of users.
    #[serde(default = "default_users_url")]
    pub users_url: String,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Layout used at start-up (default: grid).
    #[serde(default)]
    pub default_view_mode: ViewMode,
    /// Quiet period before a search edit reaches the store (default: 300).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Hide alerts automatically after this many milliseconds.
    /// Absent means alerts stay until dismissed.
    #[serde(default)]
    pub alert_auto_dismiss_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_users_url() -> String {
    DEFAULT_USERS_URL.to_string()
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view_mode: ViewMode::default(),
            search_debounce_ms: default_search_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            alert_auto_dismiss_ms: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn alert_auto_dismiss(&self) -> Option<Duration> {
        self.alert_auto_dismiss_ms.map(Duration::from_millis)
    }
}

impl LoggingConfig {
    /// Configured file, or `<data dir>/userdesk/userdesk.log`.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("userdesk")
                .join("userdesk.log")
        })
    }
}
