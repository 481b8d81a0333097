//! Error taxonomy surfaced by controller actions.

use thiserror::Error;

use crate::remote::NetworkError;

/// Failures the controller converts into notifications.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or HTTP failure from the rule service
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// User data text is not valid JSON
    #[error("Malformed user data: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// What happened to a controller action.
///
/// Actions never return `Err`: failures are already shown as notifications
/// by the time the caller sees `Failed`.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The response was applied to local state.
    Applied,
    /// The action failed and an error notification was armed.
    Failed(ClientError),
    /// A newer request (or an identity change) superseded this one; nothing was applied.
    Stale,
    /// Nothing was issued (no identity, or identity unchanged).
    Skipped,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, ActionOutcome::Stale)
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ActionOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}
