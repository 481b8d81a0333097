//! The sync controller: the only writer of local rule and evaluation state.
//!
//! Each action captures its request and issues its sequence ticket when the
//! method is called, then returns a `Send + 'static` future that performs the
//! remote call and applies the result. Responses that were superseded by a
//! newer request, an identity change, or [`SyncController::detach`] are dropped.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::config::{Config, NotificationConfig, SyncConfig};
use crate::notify::{NotificationKind, NotificationTimer};
use crate::remote::{Identity, Rule, RuleBackend, RuleId};
use crate::state::mvi::Reducer;
use crate::state::{
    EvaluationIntent, EvaluationReducer, EvaluationState, RuleListIntent, RuleListReducer,
    RuleListState,
};

use super::error::{ActionOutcome, ClientError};
use super::messages;
use super::phase::{Activity, HasActivity, PhaseGuard, SyncPhase};
use super::sequence::{OperationKind, RequestSequencer, Ticket};
use super::snapshot::SidebarSnapshot;

#[derive(Default)]
struct Shared {
    identity: Option<Identity>,
    rules: RuleListState,
    evaluation: EvaluationState,
    sequencer: RequestSequencer,
    activity: Activity,
}

impl Shared {
    fn dispatch_rules(&mut self, intent: RuleListIntent) {
        let state = std::mem::take(&mut self.rules);
        self.rules = RuleListReducer::reduce(state, intent);
    }

    fn dispatch_evaluation(&mut self, intent: EvaluationIntent) {
        let state = std::mem::take(&mut self.evaluation);
        self.evaluation = EvaluationReducer::reduce(state, intent);
    }

    /// Adopt `identity` if it is new and non-empty, dropping everything
    /// that belonged to the previous one.
    fn switch_identity(&mut self, identity: &Identity) -> bool {
        if identity.is_empty() || self.identity.as_ref() == Some(identity) {
            return false;
        }
        self.identity = Some(identity.clone());
        self.sequencer.invalidate();
        self.dispatch_rules(RuleListIntent::Reset);
        self.dispatch_evaluation(EvaluationIntent::SetOutcome { outcome: None });
        true
    }
}

impl HasActivity for Shared {
    fn activity_mut(&mut self) -> &mut Activity {
        &mut self.activity
    }
}

/// A request that has been issued but not yet sent.
struct Pending {
    identity: Identity,
    ticket: Ticket,
    _guard: PhaseGuard<Shared>,
}

enum EvaluationRequest {
    Skipped,
    Malformed(serde_json::Error, PhaseGuard<Shared>),
    Ready {
        pending: Pending,
        rule: String,
        data: Value,
    },
}

#[derive(Clone)]
pub struct SyncController {
    backend: Arc<dyn RuleBackend>,
    shared: Arc<Mutex<Shared>>,
    notifications: NotificationTimer,
    delays: NotificationConfig,
    sync: SyncConfig,
}

impl std::fmt::Debug for SyncController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncController").finish_non_exhaustive()
    }
}

impl SyncController {
    pub fn new(backend: Arc<dyn RuleBackend>, delays: NotificationConfig, sync: SyncConfig) -> Self {
        Self {
            backend,
            shared: Arc::new(Mutex::new(Shared::default())),
            notifications: NotificationTimer::new(),
            delays,
            sync,
        }
    }

    pub fn from_config(backend: Arc<dyn RuleBackend>, config: &Config) -> Self {
        Self::new(backend, config.notifications.clone(), config.sync.clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.shared.lock().identity.clone()
    }

    pub fn rules(&self) -> RuleListState {
        self.shared.lock().rules.clone()
    }

    pub fn evaluation(&self) -> EvaluationState {
        self.shared.lock().evaluation.clone()
    }

    pub fn phase(&self) -> SyncPhase {
        self.shared.lock().activity.phase()
    }

    pub fn notifications(&self) -> &NotificationTimer {
        &self.notifications
    }

    pub fn snapshot(&self) -> SidebarSnapshot {
        let (identity, rules, evaluation, phase) = {
            let shared = self.shared.lock();
            (
                shared.identity.clone(),
                shared.rules.clone(),
                shared.evaluation.clone(),
                shared.activity.phase(),
            )
        };
        SidebarSnapshot {
            identity,
            rules,
            evaluation,
            notification: self.notifications.visible(),
            phase,
        }
    }

    /// Rule input edits.
    pub fn set_selected_rule(&self, text: impl Into<String>) {
        self.shared
            .lock()
            .dispatch_evaluation(EvaluationIntent::SetSelectedRule { text: text.into() });
    }

    /// "Evaluate" on a list row. Local only; nothing is sent.
    pub fn select_for_evaluation(&self, rule: &Rule) {
        self.set_selected_rule(rule.rule_string.clone());
    }

    pub fn set_user_data_text(&self, text: impl Into<String>) {
        self.shared
            .lock()
            .dispatch_evaluation(EvaluationIntent::SetUserDataText { text: text.into() });
    }

    /// Switch to `email`. A new non-empty identity resets local state,
    /// invalidates in-flight work, and refreshes the rule list.
    pub fn set_identity(
        &self,
        email: impl Into<String>,
    ) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let identity = Identity::new(email);
        let changed = self.shared.lock().switch_identity(&identity);
        self.identity_switched(&identity, changed)
    }

    /// Register `email` with the service, then switch to it.
    ///
    /// A response arriving after a newer sign-in, an identity change, or
    /// [`detach`](Self::detach) is discarded.
    pub fn sign_in(
        &self,
        email: impl Into<String>,
    ) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let this = self.clone();
        let identity = Identity::new(email);
        let ticket = (!identity.is_empty())
            .then(|| self.shared.lock().sequencer.issue(OperationKind::SignIn));

        async move {
            let Some(ticket) = ticket else {
                return ActionOutcome::Skipped;
            };

            let result = this.backend.sign_in(&identity).await;
            let changed = {
                let mut shared = this.shared.lock();
                if !shared.sequencer.is_latest(ticket) {
                    tracing::debug!(ticket = ?ticket, "Discarding stale sign in");
                    return ActionOutcome::Stale;
                }
                result.is_ok() && shared.switch_identity(&identity)
            };

            match result {
                Ok(()) => {
                    tracing::info!(identity = %identity, "Signed in");
                    this.identity_switched(&identity, changed).await
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Sign in failed");
                    this.show_error(messages::SIGN_IN_FAILED, Some(this.delays.long()));
                    ActionOutcome::Failed(err.into())
                }
            }
        }
    }

    /// Re-fetch the rule list for the current identity.
    pub fn refresh(&self) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let this = self.clone();
        let pending = self.begin(
            &mut self.shared.lock(),
            OperationKind::Refresh,
            SyncPhase::Refreshing,
        );

        async move {
            let Some(pending) = pending else {
                return ActionOutcome::Skipped;
            };

            let result = this.backend.list_rules(&pending.identity).await;
            {
                let mut shared = this.shared.lock();
                if !shared.sequencer.is_latest(pending.ticket) {
                    tracing::debug!(ticket = ?pending.ticket, "Discarding stale rule list");
                    return ActionOutcome::Stale;
                }
                if let Ok(rules) = &result {
                    shared.dispatch_rules(RuleListIntent::ReplaceAll {
                        rules: rules.clone(),
                    });
                }
            }

            match result {
                Ok(rules) => {
                    tracing::info!(count = rules.len(), "Rule list refreshed");
                    this.notifications.clear(NotificationKind::Error);
                    ActionOutcome::Applied
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to fetch rules");
                    this.show_error(messages::RULES_FETCH_FAILED, Some(this.delays.long()));
                    ActionOutcome::Failed(err.into())
                }
            }
        }
    }

    /// Submit the current rule text as a new rule.
    pub fn add_rule(&self) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let this = self.clone();
        let request = {
            let mut shared = self.shared.lock();
            let text = shared.evaluation.selected_rule.clone();
            self.begin(&mut shared, OperationKind::Create, SyncPhase::Mutating)
                .map(|pending| (pending, text))
        };

        async move {
            let Some((pending, text)) = request else {
                return ActionOutcome::Skipped;
            };

            let result = this.backend.create_rule(&pending.identity, &text).await;
            {
                let mut shared = this.shared.lock();
                if !shared.sequencer.is_current_epoch(pending.ticket) {
                    tracing::debug!(ticket = ?pending.ticket, "Discarding stale create");
                    return ActionOutcome::Stale;
                }
                if let Ok(response) = &result {
                    shared.dispatch_rules(RuleListIntent::AppendLocal {
                        rule: Rule::from_create_response(text.clone(), response),
                    });
                    // Leave the input alone if the user kept typing.
                    if shared.evaluation.selected_rule == text {
                        shared.dispatch_evaluation(EvaluationIntent::SetSelectedRule {
                            text: String::new(),
                        });
                    }
                }
            }

            match result {
                Ok(_) => {
                    tracing::info!(rule = %text, "Rule added");
                    this.show_success(messages::RULE_ADDED);
                    drop(pending);
                    this.refresh_after_mutation().await;
                    ActionOutcome::Applied
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to add rule");
                    this.show_error(messages::RULE_ADD_FAILED, Some(this.delays.short()));
                    ActionOutcome::Failed(err.into())
                }
            }
        }
    }

    /// Delete the rule with `id`. Unknown ids still reach the service.
    pub fn delete_rule(&self, id: RuleId) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let this = self.clone();
        let pending = self.begin(
            &mut self.shared.lock(),
            OperationKind::Delete,
            SyncPhase::Mutating,
        );

        async move {
            let Some(pending) = pending else {
                return ActionOutcome::Skipped;
            };

            let result = this.backend.delete_rule(&pending.identity, &id).await;
            {
                let mut shared = this.shared.lock();
                if !shared.sequencer.is_current_epoch(pending.ticket) {
                    tracing::debug!(ticket = ?pending.ticket, "Discarding stale delete");
                    return ActionOutcome::Stale;
                }
                if result.is_ok() {
                    shared.dispatch_rules(RuleListIntent::RemoveById { id: id.clone() });
                }
            }

            match result {
                Ok(()) => {
                    tracing::info!(id = %id, "Rule deleted");
                    this.notifications.clear(NotificationKind::Error);
                    drop(pending);
                    this.refresh_after_mutation().await;
                    ActionOutcome::Applied
                }
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "Failed to delete rule");
                    this.show_error(messages::RULE_DELETE_FAILED, None);
                    ActionOutcome::Failed(err.into())
                }
            }
        }
    }

    /// Evaluate the selected rule against the user data text.
    ///
    /// Malformed user data never reaches the service.
    pub fn evaluate(&self) -> impl Future<Output = ActionOutcome> + Send + 'static {
        let this = self.clone();
        let request = {
            let mut shared = self.shared.lock();
            match self.begin(&mut shared, OperationKind::Evaluate, SyncPhase::Evaluating) {
                None => EvaluationRequest::Skipped,
                Some(pending) => match shared.evaluation.parse_user_data() {
                    Ok(data) => EvaluationRequest::Ready {
                        rule: shared.evaluation.selected_rule.clone(),
                        data,
                        pending,
                    },
                    Err(err) => EvaluationRequest::Malformed(err, pending._guard),
                },
            }
        };

        async move {
            let (pending, rule, data) = match request {
                EvaluationRequest::Skipped => return ActionOutcome::Skipped,
                EvaluationRequest::Malformed(err, guard) => {
                    drop(guard);
                    tracing::warn!(error = %err, "User data is not valid JSON");
                    this.show_error(messages::INVALID_USER_DATA, Some(this.delays.long()));
                    return ActionOutcome::Failed(ClientError::MalformedInput(err));
                }
                EvaluationRequest::Ready {
                    pending,
                    rule,
                    data,
                } => (pending, rule, data),
            };

            let result = this
                .backend
                .evaluate_rule(&pending.identity, &rule, &data)
                .await;
            {
                let mut shared = this.shared.lock();
                if !shared.sequencer.is_latest(pending.ticket) {
                    tracing::debug!(ticket = ?pending.ticket, "Discarding stale evaluation");
                    return ActionOutcome::Stale;
                }
                if let Ok(outcome) = &result {
                    shared.dispatch_evaluation(EvaluationIntent::SetOutcome {
                        outcome: Some(outcome.clone()),
                    });
                }
            }

            match result {
                Ok(outcome) => {
                    tracing::info!(rule = %rule, result = outcome.result, "Rule evaluated");
                    this.show_success(messages::RULE_EVALUATED);
                    ActionOutcome::Applied
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to evaluate rule");
                    this.show_error(messages::RULE_EVALUATE_FAILED, Some(this.delays.long()));
                    ActionOutcome::Failed(err.into())
                }
            }
        }
    }

    /// Stop applying in-flight responses and cancel notification timers.
    pub fn detach(&self) {
        self.shared.lock().sequencer.invalidate();
        self.notifications.clear_all();
        tracing::debug!("Controller detached");
    }

    /// Follow-up to an identity switch: clear notifications and refresh.
    fn identity_switched(
        &self,
        identity: &Identity,
        changed: bool,
    ) -> impl Future<Output = ActionOutcome> + Send + 'static {
        if changed {
            tracing::info!(identity = %identity, "Identity changed");
            self.notifications.clear_all();
        }

        let refresh = changed.then(|| self.refresh());
        async move {
            match refresh {
                Some(refresh) => refresh.await,
                None => ActionOutcome::Skipped,
            }
        }
    }

    fn begin(
        &self,
        shared: &mut Shared,
        kind: OperationKind,
        phase: SyncPhase,
    ) -> Option<Pending> {
        let Some(identity) = shared.identity.clone() else {
            tracing::debug!(?kind, "No identity; request not issued");
            return None;
        };
        let ticket = shared.sequencer.issue(kind);
        let token = shared.activity.enter(phase);
        Some(Pending {
            identity,
            ticket,
            _guard: PhaseGuard::new(Arc::clone(&self.shared), token),
        })
    }

    async fn refresh_after_mutation(&self) {
        if self.sync.refresh_after_mutation {
            self.refresh().await;
        }
    }

    fn show_success(&self, message: &str) {
        self.notifications
            .arm(NotificationKind::Success, message, self.delays.short());
        self.notifications.clear(NotificationKind::Error);
    }

    /// `None` keeps the message until superseded.
    fn show_error(&self, message: &str, duration: Option<std::time::Duration>) {
        match duration {
            Some(duration) => self.notifications.arm(NotificationKind::Error, message, duration),
            None => self.notifications.pin(NotificationKind::Error, message),
        }
        self.notifications.clear(NotificationKind::Success);
    }
}
