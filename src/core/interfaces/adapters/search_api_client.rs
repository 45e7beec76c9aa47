use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;

#[async_trait]
pub trait SearchApiClient: Send + Sync {
    /// Issues one GET for the search URL and returns the non-empty response body.
    async fn fetch_search_payload(&self, url: &Url) -> Result<Vec<u8>>;
}
