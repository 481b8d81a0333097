//! Local state owned by the sync controller.

pub mod evaluation;
pub mod mvi;
pub mod rules;

pub use evaluation::{EvaluationIntent, EvaluationReducer, EvaluationState};
pub use rules::{RuleListIntent, RuleListReducer, RuleListState};
