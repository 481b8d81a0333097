//! Mock rule service for exercising the HTTP client end to end.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub email: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Default)]
struct Store {
    rules: HashMap<String, Vec<Value>>,
    next_id: i64,
    failing: HashSet<String>,
    evaluations: HashMap<String, Value>,
    evaluation_delays: HashMap<String, u64>,
    opaque_create: bool,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    store: Arc<Mutex<Store>>,
}

/// In-memory implementation of the rule service REST surface.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    /// Start a new mock rule service.
    pub async fn start() -> Self {
        let state = MockState::default();

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Store rules for `email`, assigning sequential numeric ids.
    pub async fn seed(&self, email: &str, rules: &[&str]) {
        let mut store = self.state.store.lock().await;
        for rule in rules {
            store.next_id += 1;
            let id = store.next_id;
            store
                .rules
                .entry(email.to_string())
                .or_default()
                .push(json!({"id": id, "ruleString": rule}));
        }
    }

    /// Canonical rule set for `email`.
    pub async fn rules_for(&self, email: &str) -> Vec<Value> {
        self.state
            .store
            .lock()
            .await
            .rules
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Make `operation` ("signin", "list", "create", "delete", "evaluate") answer 500.
    pub async fn fail(&self, operation: &str) {
        self.state
            .store
            .lock()
            .await
            .failing
            .insert(operation.to_string());
    }

    /// Response body for evaluating `rule`.
    pub async fn set_evaluation(&self, rule: &str, response: Value) {
        self.state
            .store
            .lock()
            .await
            .evaluations
            .insert(rule.to_string(), response);
    }

    /// Hold the evaluate response for `rule` by `ms` milliseconds.
    pub async fn delay_evaluation(&self, rule: &str, ms: u64) {
        self.state
            .store
            .lock()
            .await
            .evaluation_delays
            .insert(rule.to_string(), ms);
    }

    /// Answer creates with a plain string instead of the stored rule.
    pub async fn set_opaque_create(&self, opaque: bool) {
        self.state.store.lock().await.opaque_create = opaque;
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn operation_for(method: &str, path: &str) -> Option<&'static str> {
    match (method, path) {
        ("POST", "/api/rule/signin") => Some("signin"),
        ("GET", "/api/rule/getAll") => Some("list"),
        ("POST", "/api/rule/evaluate") => Some("evaluate"),
        ("POST", "/api/rule/") | ("POST", "/api/rule") => Some("create"),
        ("DELETE", p) if p.starts_with("/api/rule/") => Some("delete"),
        _ => None,
    }
}

async fn handle_request(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    req: Request<Body>,
) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let email = query.get("email").cloned();
    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        email: email.clone(),
        content_type,
        body: body.clone(),
    });

    let Some(operation) = operation_for(&method, &path) else {
        return respond(StatusCode::NOT_FOUND, json!({"error": "no such route"}));
    };
    let email = email.unwrap_or_default();

    let mut store = state.store.lock().await;
    if store.failing.contains(operation) {
        return respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": format!("{} failed", operation)}),
        );
    }

    match operation {
        "signin" => respond(StatusCode::OK, json!({"email": email})),
        "list" => {
            let rules = store.rules.get(&email).cloned().unwrap_or_default();
            respond(StatusCode::OK, Value::Array(rules))
        }
        "create" => {
            let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
            let rule = payload["rule"].as_str().unwrap_or_default().to_string();
            store.next_id += 1;
            let stored = json!({"id": store.next_id, "ruleString": rule});
            store.rules.entry(email).or_default().push(stored.clone());
            if store.opaque_create {
                respond(StatusCode::CREATED, json!("Rule created"))
            } else {
                respond(StatusCode::CREATED, stored)
            }
        }
        "delete" => {
            let id = path.trim_start_matches("/api/rule/").to_string();
            if let Some(rules) = store.rules.get_mut(&email) {
                rules.retain(|r| r["id"].to_string().trim_matches('"') != id);
            }
            Response::builder()
                .status(StatusCode::NO_CONTENT)
                .body(Body::empty())
                .unwrap()
        }
        "evaluate" => {
            let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
            let rule = payload["rule"].as_str().unwrap_or_default().to_string();
            let response = store.evaluations.get(&rule).cloned().unwrap_or_else(|| {
                json!({"result": false, "ast": {"type": "operand", "value": rule}})
            });
            let delay = store.evaluation_delays.get(&rule).copied().unwrap_or(0);
            drop(store);

            if delay > 0 {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
            }
            respond(StatusCode::OK, response)
        }
        _ => unreachable!(),
    }
}

fn respond(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
