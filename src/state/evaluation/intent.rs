use crate::remote::EvaluationOutcome;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EvaluationIntent {
    /// User typed a rule, or picked "Evaluate" on a list row. Same slot either way.
    SetSelectedRule { text: String },
    /// Raw textarea contents. Parsed only when evaluating.
    SetUserDataText { text: String },
    /// Replace the previous outcome wholesale.
    SetOutcome { outcome: Option<EvaluationOutcome> },
}

impl Intent for EvaluationIntent {}
