use crate::notify::Notification;
use crate::remote::Identity;
use crate::state::{EvaluationState, RuleListState};

use super::phase::SyncPhase;

/// Everything the view needs, copied out of the controller in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSnapshot {
    pub identity: Option<Identity>,
    pub rules: RuleListState,
    pub evaluation: EvaluationState,
    pub notification: Option<Notification>,
    pub phase: SyncPhase,
}

impl SidebarSnapshot {
    /// "True"/"False" once an evaluation has completed.
    pub fn result_label(&self) -> Option<&'static str> {
        self.evaluation
            .outcome
            .as_ref()
            .map(|outcome| if outcome.result { "True" } else { "False" })
    }
}
