//! HTTP client for the explorer's `module`/`action` API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ExplorerError;
use crate::network::Network;

/// Module whose actions are JSON-RPC passthroughs without a `status` field.
const PROXY_MODULE: &str = "proxy";

/// Response envelope shared by every explorer action.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<Value>,
}

impl Envelope {
    /// Validate the envelope and return its `result`.
    fn into_result(self, module: &str) -> Result<Value, ExplorerError> {
        if module != PROXY_MODULE && self.status.as_deref() != Some("1") {
            return Err(ExplorerError::StatusMismatch {
                status: self.status.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            });
        }

        match self.result {
            None | Some(Value::Null) => Err(ExplorerError::MissingResult),
            Some(result) => Ok(result),
        }
    }
}

/// Thin client over a network's explorer endpoint.
///
/// Every call is a GET with `module`, `action`, action parameters and the
/// network's `apikey`. Calls are independent, so one client can be shared by
/// any number of concurrent adapters.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    client: reqwest::Client,
}

impl ExplorerClient {
    /// Create a client with the given per-call timeout.
    pub fn new(timeout: Duration) -> Result<Self, ExplorerError> {
        let client = reqwest::Client::builder()
            .user_agent("ChainAssistant/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| ExplorerError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The underlying reqwest client.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Call `module`/`action` on `network` and return the validated `result`.
    pub async fn call(
        &self,
        network: &Network,
        module: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ExplorerError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 3);
        query.push(("module", module));
        query.push(("action", action));
        query.extend_from_slice(params);

        debug!(
            "Explorer call {}/{} on {} ({})",
            module, action, network.id, network.base_api_url
        );

        let mut request = self.client.get(&network.base_api_url).query(&query);
        if let Some(ref key) = network.api_key {
            request = request.query(&[("apikey", key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ExplorerError::HttpStatus(response.status().as_u16()));
        }

        let envelope: Envelope = response.json().await?;
        envelope.into_result(module)
    }

    /// Call and decode `result` into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        network: &Network,
        module: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ExplorerError> {
        let result = self.call(network, module, action, params).await?;
        Ok(serde_json::from_value(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_one_yields_result() {
        let env = envelope(json!({"status": "1", "message": "OK", "result": "42"}));
        assert_eq!(env.into_result("account").unwrap(), json!("42"));
    }

    #[test]
    fn test_status_zero_is_mismatch() {
        let env = envelope(json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"}));
        match env.into_result("account") {
            Err(ExplorerError::StatusMismatch { status, message }) => {
                assert_eq!(status, "0");
                assert_eq!(message, "NOTOK");
            }
            other => panic!("Expected StatusMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_proxy_ignores_status() {
        let env = envelope(json!({"jsonrpc": "2.0", "id": 1, "result": "0x10"}));
        assert_eq!(env.into_result("proxy").unwrap(), json!("0x10"));
    }

    #[test]
    fn test_null_result_is_missing() {
        let env = envelope(json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        assert!(matches!(env.into_result("proxy"), Err(ExplorerError::MissingResult)));

        let env = envelope(json!({"status": "1", "message": "OK"}));
        assert!(matches!(env.into_result("stats"), Err(ExplorerError::MissingResult)));
    }
}
