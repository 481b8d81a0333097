//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_backend;
pub mod mock_backend;

use rulesync::config::{BackendConfig, NotificationConfig, SyncConfig};
use rulesync::{RemoteRuleClient, SyncController};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use fake_backend::FakeBackend;

pub const SHORT: Duration = Duration::from_millis(3000);
pub const LONG: Duration = Duration::from_millis(5000);

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn delays() -> NotificationConfig {
    NotificationConfig {
        short_ms: SHORT.as_millis() as u64,
        long_ms: LONG.as_millis() as u64,
    }
}

/// Controller over a fake backend. `refresh_after_mutation` off unless asked for.
pub fn controller(backend: &Arc<FakeBackend>, refresh_after_mutation: bool) -> SyncController {
    SyncController::new(
        backend.clone(),
        delays(),
        SyncConfig {
            refresh_after_mutation,
        },
    )
}

/// HTTP client pointed at `base_url` with short timeouts.
pub fn http_client(base_url: &str) -> RemoteRuleClient {
    RemoteRuleClient::new(&BackendConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 1,
    })
    .expect("Failed to build client")
}
