//! Client for the aphid risk prediction endpoint
//!
//! One call per invocation: no retry, no timeout, no cancellation.

use async_trait::async_trait;
use reqwest::{Client, Url};
use shared::models::{PredictionRequest, PredictionResponse};

use crate::config::PredictionConfig;
use crate::error::{DashboardError, DashboardResult};

/// Anything that can turn a request into a risk prediction
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> DashboardResult<PredictionResponse>;
}

/// HTTP prediction client
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Create a new PredictionClient for the configured endpoint
    pub fn new(config: &PredictionConfig) -> DashboardResult<Self> {
        Self::with_client(Client::new(), config)
    }

    /// Create a new PredictionClient reusing an existing HTTP client
    pub fn with_client(client: Client, config: &PredictionConfig) -> DashboardResult<Self> {
        let endpoint = Url::parse(&config.endpoint()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Invalid prediction endpoint {}: {}",
                config.endpoint(),
                e
            ))
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> DashboardResult<PredictionResponse> {
        tracing::debug!(
            country = %request.country,
            crop = %request.crop,
            "POST {}",
            self.endpoint
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(format!("Prediction request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| DashboardError::Decode(format!("Failed to parse prediction response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = PredictionClient::new(&PredictionConfig::default()).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:5000/api/predict");
    }

    #[test]
    fn test_invalid_endpoint_is_a_configuration_error() {
        let config = PredictionConfig {
            base_url: "not a url".to_string(),
            path: "/api/predict".to_string(),
        };
        let result = PredictionClient::new(&config);
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }
}
