use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Where the rule service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the rule service (e.g., "https://rules.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Auto-clear delays for transient messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delay for confirmations and add failures (default: 3000).
    #[serde(default = "default_short_ms")]
    pub short_ms: u64,
    /// Delay for evaluation failures and malformed user data (default: 5000).
    #[serde(default = "default_long_ms")]
    pub long_ms: u64,
}

/// Synchronization behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Re-fetch the rule list after every successful create or delete.
    #[serde(default = "default_refresh_after_mutation")]
    pub refresh_after_mutation: bool,
}

fn default_base_url() -> String {
    "https://ruleenginebackend-1qwp.onrender.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_short_ms() -> u64 {
    3000
}

fn default_long_ms() -> u64 {
    5000
}

fn default_refresh_after_mutation() -> bool {
    true
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl NotificationConfig {
    pub fn short(&self) -> Duration {
        Duration::from_millis(self.short_ms)
    }

    pub fn long(&self) -> Duration {
        Duration::from_millis(self.long_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            short_ms: default_short_ms(),
            long_ms: default_long_ms(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_after_mutation: default_refresh_after_mutation(),
        }
    }
}
