use crate::core::{HttpClient, ParsedResult, RequestTarget};
use crate::utils::error::{FetchError, Result};
use futures::future::join_all;

/// Fetches every target concurrently and fails the batch if any single fetch fails.
pub struct BatchFetcher<H: HttpClient> {
    client: H,
}

impl<H: HttpClient> BatchFetcher<H> {
    pub fn new(client: H) -> Self {
        Self { client }
    }

    /// Validates `urls` up front; no request is issued if any of them is malformed.
    pub async fn fetch_urls(&self, urls: &[&str]) -> Result<Vec<ParsedResult>> {
        let targets = urls
            .iter()
            .map(|url| RequestTarget::parse(url))
            .collect::<Result<Vec<_>>>()?;

        self.fetch_all(&targets).await
    }

    /// Results come back in the order of `targets`, whatever order the responses arrive in.
    /// When several targets fail, the earliest one in `targets` is reported.
    pub async fn fetch_all(&self, targets: &[RequestTarget]) -> Result<Vec<ParsedResult>> {
        if targets.is_empty() {
            tracing::debug!("No targets given, nothing to fetch");
            return Ok(Vec::new());
        }

        tracing::info!("Fetching {} targets concurrently", targets.len());
        let settled = join_all(targets.iter().map(|target| self.fetch_one(target))).await;

        let failures = settled.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            tracing::debug!("{} of {} fetches failed", failures, settled.len());
        }

        settled.into_iter().collect()
    }

    pub async fn fetch_one(&self, target: &RequestTarget) -> Result<ParsedResult> {
        let envelope = self.client.get(target).await?;

        if !envelope.is_ok() {
            tracing::debug!(
                "Rejecting {}: HTTP {} {}",
                target,
                envelope.status,
                envelope.status_text
            );
            return Err(FetchError::Status {
                target: target.to_string(),
                status: envelope.status,
                status_text: envelope.status_text,
            });
        }

        let body = envelope.body.unwrap_or_default();
        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            target: target.to_string(),
            source,
        })
    }
}
