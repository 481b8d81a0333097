//! Configuration loading for the rule client.
//!
//! Everything has a default, so a missing file is a valid setup.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, NotificationConfig, SyncConfig};
