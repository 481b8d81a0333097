//! Orchestration of remote calls, local state, and notifications.

mod controller;
mod error;
pub mod messages;
mod phase;
mod sequence;
mod snapshot;

pub use controller::SyncController;
pub use error::{ActionOutcome, ClientError};
pub use phase::SyncPhase;
pub use sequence::{OperationKind, RequestSequencer, Ticket};
pub use snapshot::SidebarSnapshot;
