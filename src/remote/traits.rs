//! Seam between the controller and whatever serves rules.

use async_trait::async_trait;
use serde_json::Value;

use super::error::NetworkError;
use super::types::{EvaluationOutcome, Identity, Rule, RuleId};

/// Request layer for the rule service.
///
/// Every call is scoped to one identity. Implementations perform no retries
/// and no validation of rule text or user data; failures are returned as-is.
#[async_trait]
pub trait RuleBackend: Send + Sync {
    /// Register (or re-register) the identity with the service.
    async fn sign_in(&self, identity: &Identity) -> Result<(), NetworkError>;

    /// Fetch every rule stored for the identity.
    async fn list_rules(&self, identity: &Identity) -> Result<Vec<Rule>, NetworkError>;

    /// Store a new rule. The response is opaque.
    async fn create_rule(&self, identity: &Identity, rule_text: &str)
        -> Result<Value, NetworkError>;

    /// Delete a rule by id.
    async fn delete_rule(&self, identity: &Identity, rule_id: &RuleId)
        -> Result<(), NetworkError>;

    /// Evaluate `rule_text` against already-parsed `user_data`.
    async fn evaluate_rule(
        &self,
        identity: &Identity,
        rule_text: &str,
        user_data: &Value,
    ) -> Result<EvaluationOutcome, NetworkError>;
}
