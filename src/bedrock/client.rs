//! HTTP client for the foundation-model service
//!
//! Low-level JSON-in/JSON-out access to model invocation and the model
//! catalog. Model-specific request/response handling lives with the
//! callers (`rag::embedder`, `rag::generator`).

use crate::config::Config;
use crate::errors::{RagError, Result};
use crate::bedrock::types::{ModelCatalogResponse, ModelSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for a Bedrock-style model service
#[derive(Debug, Clone)]
pub struct BedrockClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl BedrockClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the service, without trailing slash
    /// * `timeout_secs` - Per-request deadline; a request past it fails
    ///   with `RagError::Timeout` instead of hanging
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RagError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.service.endpoint, config.service.timeout_secs)
    }

    /// Invoke a model with a JSON body and parse the JSON response
    ///
    /// Calls POST /model/{modelId}/invoke
    pub async fn invoke_model<B, R>(&self, model_id: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/model/{}/invoke", self.base_url, model_id);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?
            .error_for_status()
            .map_err(RagError::Http)?;

        let parsed = response
            .json::<R>()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(parsed)
    }

    /// List the service's model catalog
    ///
    /// Calls GET /foundation-models
    pub async fn list_foundation_models(&self) -> Result<Vec<ModelSummary>> {
        let url = format!("{}/foundation-models", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?
            .error_for_status()
            .map_err(RagError::Http)?;

        let catalog: ModelCatalogResponse = response
            .json()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(catalog.model_summaries)
    }

    /// Get catalog details for a single model
    ///
    /// Calls GET /foundation-models/{modelId}
    pub async fn get_foundation_model(&self, model_id: &str) -> Result<ModelSummary> {
        let url = format!("{}/foundation-models/{}", self.base_url, model_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?
            .error_for_status()
            .map_err(RagError::Http)?;

        let summary: ModelSummary = response
            .json()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(summary)
    }

    /// Check if the service is reachable
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/foundation-models", self.base_url);
        self.client
            .get(&url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
            .is_ok()
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_request_error(&self, err: reqwest::Error) -> RagError {
        if err.is_timeout() {
            RagError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else {
            RagError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BedrockClient::new("http://127.0.0.1:8000", 30).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = BedrockClient::new("http://127.0.0.1:8000/", 30).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_client_from_config() {
        let config = Config::default();
        let client = BedrockClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), config.service.endpoint);
    }

    #[tokio::test]
    async fn test_unresponsive_server_times_out() {
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept connections and hold them open without ever answering.
            let mut sockets = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    sockets.push(socket);
                }
            }
        });

        let client = BedrockClient::new(&format!("http://{addr}"), 1).unwrap();
        let result: Result<serde_json::Value> = client
            .invoke_model(
                "amazon.titan-embed-text-v2:0",
                &serde_json::json!({"inputText": "hello"}),
            )
            .await;

        match result {
            Err(RagError::Timeout { duration_ms }) => assert_eq!(duration_ms, 1000),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore] // Requires a running model service
    async fn test_list_models_integration() {
        let client = BedrockClient::new("http://127.0.0.1:8000", 30).unwrap();
        let models = client.list_foundation_models().await;
        assert!(models.is_ok());
    }
}
