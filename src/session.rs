//! Host-facing bootstrap.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::remote::RemoteRuleClient;
use crate::sync::SyncController;
use crate::telemetry::init_tracing;

/// Load config from the default location, set up logging, and build a controller.
pub fn bootstrap() -> anyhow::Result<SyncController> {
    bootstrap_from(&Config::config_path())
}

/// Same as [`bootstrap`] with an explicit config path.
pub fn bootstrap_from(path: &Path) -> anyhow::Result<SyncController> {
    if let Some(log_path) = init_tracing() {
        tracing::info!(log_path = %log_path, "Logging enabled");
    }

    let config = Config::load_from(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    let client = RemoteRuleClient::new(&config.backend).context("building rule client")?;

    tracing::info!(base_url = %client.base_url(), "Rule client ready");
    Ok(SyncController::from_config(Arc::new(client), &config))
}
