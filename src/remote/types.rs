use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user's email. Sole partition key for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identity(String);

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-assigned rule identifier. The backend may hand out numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::Number(n) => write!(f, "{}", n),
            RuleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RuleId {
    fn from(value: i64) -> Self {
        RuleId::Number(value)
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        RuleId::Text(value.to_string())
    }
}

/// A stored rule. `id` is absent for entries appended locally before a refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleId>,
    pub rule_string: String,
}

impl Rule {
    pub fn new(id: impl Into<RuleId>, rule_string: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            rule_string: rule_string.into(),
        }
    }

    pub fn unsaved(rule_string: impl Into<String>) -> Self {
        Self {
            id: None,
            rule_string: rule_string.into(),
        }
    }

    /// Build the local entry for a freshly created rule.
    ///
    /// The create response is opaque; an `id` is picked up only when the
    /// body happens to be an object carrying one.
    pub fn from_create_response(rule_string: impl Into<String>, response: &Value) -> Self {
        let id = response
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value::<RuleId>(id).ok());
        Self {
            id,
            rule_string: rule_string.into(),
        }
    }
}

/// Result of evaluating a rule against user data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub result: bool,
    #[serde(default)]
    pub ast: Value,
}

/// Body of the create request.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRuleBody<'a> {
    pub rule: &'a str,
}

/// Body of the evaluate request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluateRuleBody<'a> {
    pub rule: &'a str,
    pub user_data: &'a Value,
}
