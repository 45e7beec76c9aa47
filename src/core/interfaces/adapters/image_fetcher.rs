use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image_bytes(&self, url: &Url) -> Result<Vec<u8>>;
}
