use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::core::interfaces::adapters::SearchApiClient;

pub struct ReqwestSearchApiClient {
    request_timeout: Duration,
}

impl ReqwestSearchApiClient {
    pub fn new(request_timeout: Duration) -> Self {
        log::debug!(
            "[SEARCH_API] creating client with {:?} timeout",
            request_timeout
        );
        Self { request_timeout }
    }

    fn open_session(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("Failed to create HTTP session")
    }
}

fn accept_search_response(status: StatusCode, body: &[u8]) -> Result<()> {
    if !status.is_success() {
        anyhow::bail!("search API responded with HTTP {}", status);
    }

    if body.is_empty() {
        anyhow::bail!("search API responded without data");
    }

    Ok(())
}

#[async_trait]
impl SearchApiClient for ReqwestSearchApiClient {
    async fn fetch_search_payload(&self, url: &Url) -> Result<Vec<u8>> {
        // Single-use session: it is dropped with this call whatever the outcome.
        let session = self.open_session()?;

        log::info!("[SEARCH_API] Requesting search results");
        log::debug!("[SEARCH_API] GET {}", url);

        let response = session
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url.host_str().unwrap_or("?")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("failed to read search response body")?;

        log::debug!("[SEARCH_API] HTTP {} with {} bytes", status, body.len());

        accept_search_response(status, &body)?;

        Ok(body.to_vec())
    }
}
