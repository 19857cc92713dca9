use crate::error::{GatewayError, Result};
use crate::gateway::RecommendationGateway;
use crate::wire::{RecommendRequest, RecommendResponse};
use async_trait::async_trait;
use florarec_types::RawPlantRecord;

/// reqwest-backed gateway speaking the service's JSON protocol.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecommendationGateway for HttpGateway {
    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<RawPlantRecord>> {
        let url = format!("{}/recommend", self.base_url);
        tracing::debug!(%url, "sending recommendation request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The failure body may be structured, plain text, or absent.
            let body = response.text().await.unwrap_or_default();
            let err = GatewayError::from_failure_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), "recommendation request rejected");
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let parsed: RecommendResponse =
            serde_json::from_str(&body).map_err(|err| GatewayError::Malformed(err.to_string()))?;

        tracing::debug!(results = parsed.results.len(), "recommendation response received");
        Ok(parsed.results)
    }
}
