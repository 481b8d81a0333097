//! HTTP implementation of [`RuleBackend`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;

use crate::config::BackendConfig;

use super::error::NetworkError;
use super::traits::RuleBackend;
use super::types::{CreateRuleBody, EvaluateRuleBody, EvaluationOutcome, Identity, Rule, RuleId};

/// Client for the rule service REST surface.
///
/// The identity always travels as the `email` query parameter.
pub struct RemoteRuleClient {
    client: Client,
    base_url: Url,
}

impl RemoteRuleClient {
    pub fn new(config: &BackendConfig) -> Result<Self, NetworkError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| NetworkError::InvalidUrl {
            operation: "client",
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(NetworkError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(
        &self,
        operation: &'static str,
        segments: &[&str],
        identity: &Identity,
    ) -> Result<Url, NetworkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::InvalidUrl {
                operation,
                reason: format!("base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("email", identity.as_str());
        Ok(url)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, NetworkError> {
        let response = request
            .send()
            .await
            .map_err(|source| NetworkError::Transport { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(
                operation,
                status = %status,
                error = %message,
                "Rule service error"
            );

            return Err(NetworkError::Status {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl RuleBackend for RemoteRuleClient {
    async fn sign_in(&self, identity: &Identity) -> Result<(), NetworkError> {
        let url = self.endpoint("sign_in", &["api", "rule", "signin"], identity)?;
        tracing::debug!(operation = "sign_in", path = %url.path(), "Sending rule request");

        self.send("sign_in", self.client.post(url)).await?;
        Ok(())
    }

    async fn list_rules(&self, identity: &Identity) -> Result<Vec<Rule>, NetworkError> {
        let url = self.endpoint("list", &["api", "rule", "getAll"], identity)?;
        tracing::debug!(operation = "list", path = %url.path(), "Sending rule request");

        let response = self.send("list", self.client.get(url)).await?;
        let rules: Vec<Rule> = response
            .json()
            .await
            .map_err(|source| NetworkError::Decode {
                operation: "list",
                source,
            })?;

        tracing::debug!(count = rules.len(), "Fetched rules");
        Ok(rules)
    }

    async fn create_rule(
        &self,
        identity: &Identity,
        rule_text: &str,
    ) -> Result<Value, NetworkError> {
        // Trailing slash matches the route the service registers for create.
        let url = self.endpoint("create", &["api", "rule", ""], identity)?;
        tracing::debug!(operation = "create", path = %url.path(), "Sending rule request");

        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&CreateRuleBody { rule: rule_text });
        let response = self.send("create", request).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| NetworkError::Decode {
                operation: "create",
                source,
            })?;

        Ok(serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
    }

    async fn delete_rule(&self, identity: &Identity, rule_id: &RuleId) -> Result<(), NetworkError> {
        let id = rule_id.to_string();
        let url = self.endpoint("delete", &["api", "rule", &id], identity)?;
        tracing::debug!(operation = "delete", path = %url.path(), "Sending rule request");

        self.send("delete", self.client.delete(url)).await?;
        Ok(())
    }

    async fn evaluate_rule(
        &self,
        identity: &Identity,
        rule_text: &str,
        user_data: &Value,
    ) -> Result<EvaluationOutcome, NetworkError> {
        let url = self.endpoint("evaluate", &["api", "rule", "evaluate"], identity)?;
        tracing::debug!(operation = "evaluate", path = %url.path(), "Sending rule request");

        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&EvaluateRuleBody {
                rule: rule_text,
                user_data,
            });
        let response = self.send("evaluate", request).await?;

        response
            .json()
            .await
            .map_err(|source| NetworkError::Decode {
                operation: "evaluate",
                source,
            })
    }
}
