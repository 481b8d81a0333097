//! Client-side state synchronization for a remote rule-evaluation service.
//!
//! - [`remote`]: request layer (list, create, delete, evaluate, sign-in)
//! - [`state`]: local mirror of the rule list and evaluation inputs/outputs
//! - [`notify`]: auto-expiring success/error messages
//! - [`sync`]: the controller tying them together
//! - [`view`]: terminal rendering of a controller snapshot

pub mod config;
pub mod notify;
pub mod remote;
pub mod session;
pub mod state;
pub mod sync;
pub mod telemetry;
pub mod view;

pub use config::{Config, ConfigError};
pub use notify::{Notification, NotificationKind, NotificationTimer};
pub use remote::{
    EvaluationOutcome, Identity, NetworkError, RemoteRuleClient, Rule, RuleBackend, RuleId,
};
pub use session::{bootstrap, bootstrap_from};
pub use sync::{ActionOutcome, ClientError, SidebarSnapshot, SyncController, SyncPhase};
