use crate::state::mvi::Reducer;
use crate::state::rules::intent::RuleListIntent;
use crate::state::rules::state::RuleListState;

pub struct RuleListReducer;

impl Reducer for RuleListReducer {
    type State = RuleListState;
    type Intent = RuleListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RuleListIntent::ReplaceAll { rules } => RuleListState::new(rules),
            RuleListIntent::AppendLocal { rule } => {
                let mut rules = state.into_rules();
                rules.push(rule);
                RuleListState::new(rules)
            }
            RuleListIntent::RemoveById { id } => {
                let mut rules = state.into_rules();
                // Entries without an id never match.
                rules.retain(|rule| rule.id.as_ref() != Some(&id));
                RuleListState::new(rules)
            }
            RuleListIntent::Reset => RuleListState::default(),
        }
    }
}
