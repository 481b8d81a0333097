use serde_json::Value;

use crate::remote::EvaluationOutcome;
use crate::state::mvi::MirrorState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationState {
    pub selected_rule: String,
    pub user_data_text: String,
    pub outcome: Option<EvaluationOutcome>,
}

impl MirrorState for EvaluationState {}

impl EvaluationState {
    /// Parse the user data text as JSON.
    pub fn parse_user_data(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.user_data_text)
    }
}
