//! Request layer for the remote rule service.
//!
//! [`RuleBackend`] is the seam the controller talks to;
//! [`RemoteRuleClient`] is the HTTP implementation.

mod client;
mod error;
mod traits;
mod types;

pub use client::RemoteRuleClient;
pub use error::NetworkError;
pub use traits::RuleBackend;
pub use types::{EvaluationOutcome, Identity, Rule, RuleId};
