use crate::domain::model::{RequestTarget, ResponseEnvelope};
use crate::domain::ports::HttpClient;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `HttpClient` backed by reqwest. No timeout is configured.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, target: &RequestTarget) -> Result<ResponseEnvelope> {
        tracing::debug!("Making API request to: {}", target);
        let response = self
            .client
            .get(target.url().clone())
            .send()
            .await
            .map_err(|e| FetchError::transport(target.as_str(), e))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        tracing::debug!("API response status for {}: {}", target, status);

        if !status.is_success() {
            return Ok(ResponseEnvelope::failed(status.as_u16(), status_text));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(target.as_str(), e))?;
        Ok(ResponseEnvelope::ok(status.as_u16(), status_text, body.to_vec()))
    }
}
