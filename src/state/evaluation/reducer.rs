use crate::state::evaluation::intent::EvaluationIntent;
use crate::state::evaluation::state::EvaluationState;
use crate::state::mvi::Reducer;

pub struct EvaluationReducer;

impl Reducer for EvaluationReducer {
    type State = EvaluationState;
    type Intent = EvaluationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EvaluationIntent::SetSelectedRule { text } => EvaluationState {
                selected_rule: text,
                ..state
            },
            EvaluationIntent::SetUserDataText { text } => EvaluationState {
                user_data_text: text,
                ..state
            },
            EvaluationIntent::SetOutcome { outcome } => EvaluationState { outcome, ..state },
        }
    }
}
