//! In-process rule service for tests that run on a paused clock.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use rulesync::{EvaluationOutcome, Identity, NetworkError, Rule, RuleBackend, RuleId};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// A call the controller made, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SignIn(String),
    List(String),
    Create(String, String),
    Delete(String, RuleId),
    Evaluate(String, String, Value),
}

#[derive(Default)]
struct FakeState {
    rules: HashMap<String, Vec<Rule>>,
    next_id: i64,
    failing: HashSet<&'static str>,
    evaluations: HashMap<String, EvaluationOutcome>,
    evaluation_delays: HashMap<String, Duration>,
    delays: HashMap<&'static str, Duration>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, email: &str, rules: &[&str]) {
        let mut state = self.state.lock();
        for rule in rules {
            state.next_id += 1;
            let id = state.next_id;
            state
                .rules
                .entry(email.to_string())
                .or_default()
                .push(Rule::new(id, *rule));
        }
    }

    pub fn rules_for(&self, email: &str) -> Vec<Rule> {
        self.state
            .lock()
            .rules
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Make `operation` ("sign_in", "list", "create", "delete", "evaluate") fail.
    pub fn fail(&self, operation: &'static str) {
        self.state.lock().failing.insert(operation);
    }

    pub fn heal(&self, operation: &'static str) {
        self.state.lock().failing.remove(operation);
    }

    /// Hold every response of `operation` for `delay`.
    pub fn delay(&self, operation: &'static str, delay: Duration) {
        self.state.lock().delays.insert(operation, delay);
    }

    pub fn set_evaluation(&self, rule: &str, result: bool, ast: Value) {
        self.state
            .lock()
            .evaluations
            .insert(rule.to_string(), EvaluationOutcome { result, ast });
    }

    pub fn delay_evaluation(&self, rule: &str, delay: Duration) {
        self.state
            .lock()
            .evaluation_delays
            .insert(rule.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|c| matches(c)).count()
    }

    fn begin(&self, operation: &'static str, call: Call) -> (Duration, bool) {
        let mut state = self.state.lock();
        state.calls.push(call);
        let delay = state.delays.get(operation).copied().unwrap_or_default();
        (delay, state.failing.contains(operation))
    }
}

fn injected(operation: &'static str) -> NetworkError {
    NetworkError::Status {
        operation,
        status: 500,
        message: "injected failure".to_string(),
    }
}

#[async_trait]
impl RuleBackend for FakeBackend {
    async fn sign_in(&self, identity: &Identity) -> Result<(), NetworkError> {
        let (delay, failing) = self.begin("sign_in", Call::SignIn(identity.to_string()));
        tokio::time::sleep(delay).await;
        if failing {
            return Err(injected("sign_in"));
        }
        Ok(())
    }

    async fn list_rules(&self, identity: &Identity) -> Result<Vec<Rule>, NetworkError> {
        let (delay, failing) = self.begin("list", Call::List(identity.to_string()));
        tokio::time::sleep(delay).await;
        if failing {
            return Err(injected("list"));
        }
        Ok(self.rules_for(identity.as_str()))
    }

    async fn create_rule(
        &self,
        identity: &Identity,
        rule_text: &str,
    ) -> Result<Value, NetworkError> {
        let (delay, failing) = self.begin(
            "create",
            Call::Create(identity.to_string(), rule_text.to_string()),
        );
        tokio::time::sleep(delay).await;
        if failing {
            return Err(injected("create"));
        }

        let mut state = self.state.lock();
        state.next_id += 1;
        let id = state.next_id;
        state
            .rules
            .entry(identity.to_string())
            .or_default()
            .push(Rule::new(id, rule_text));
        Ok(json!({"id": id, "ruleString": rule_text}))
    }

    async fn delete_rule(&self, identity: &Identity, rule_id: &RuleId) -> Result<(), NetworkError> {
        let (delay, failing) = self.begin(
            "delete",
            Call::Delete(identity.to_string(), rule_id.clone()),
        );
        tokio::time::sleep(delay).await;
        if failing {
            return Err(injected("delete"));
        }

        if let Some(rules) = self.state.lock().rules.get_mut(identity.as_str()) {
            rules.retain(|r| r.id.as_ref() != Some(rule_id));
        }
        Ok(())
    }

    async fn evaluate_rule(
        &self,
        identity: &Identity,
        rule_text: &str,
        user_data: &Value,
    ) -> Result<EvaluationOutcome, NetworkError> {
        let (delay, failing) = self.begin(
            "evaluate",
            Call::Evaluate(identity.to_string(), rule_text.to_string(), user_data.clone()),
        );
        let (extra, outcome) = {
            let state = self.state.lock();
            (
                state.evaluation_delays.get(rule_text).copied().unwrap_or_default(),
                state.evaluations.get(rule_text).cloned(),
            )
        };
        tokio::time::sleep(delay + extra).await;
        if failing {
            return Err(injected("evaluate"));
        }

        Ok(outcome.unwrap_or_else(|| EvaluationOutcome {
            result: false,
            ast: json!({"type": "operand", "value": rule_text}),
        }))
    }
}
