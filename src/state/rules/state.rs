use crate::remote::{Rule, RuleId};
use crate::state::mvi::MirrorState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleListState {
    rules: Vec<Rule>,
}

impl MirrorState for RuleListState {}

impl RuleListState {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn contains_id(&self, id: &RuleId) -> bool {
        self.rules.iter().any(|r| r.id.as_ref() == Some(id))
    }

    pub(super) fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}
