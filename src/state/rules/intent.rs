use crate::remote::{Rule, RuleId};
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RuleListIntent {
    /// Authoritative list from a refresh. Discards prior contents.
    ReplaceAll { rules: Vec<Rule> },
    /// Entry added after a create, ahead of the next refresh.
    AppendLocal { rule: Rule },
    /// Drop the entry with this id. Unknown ids are ignored.
    RemoveById { id: RuleId },
    /// Forget everything (identity change).
    Reset,
}

impl Intent for RuleListIntent {}
