use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::core::interfaces::adapters::ImageFetcher;

pub struct ReqwestImageFetcher {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl ReqwestImageFetcher {
    /// The timeout is set on every request, so the shared client never needs
    /// a fallible builder.
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            request_timeout,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn accept_image_response(url: &Url, status: StatusCode, byte_count: usize) -> Result<()> {
    if !status.is_success() {
        anyhow::bail!("image {} responded with HTTP {}", url, status);
    }

    if byte_count == 0 {
        anyhow::bail!("image {} is empty", url);
    }

    Ok(())
}

#[async_trait]
impl ImageFetcher for ReqwestImageFetcher {
    async fn fetch_image_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        log::debug!("[IMAGE_FETCH] GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .timeout(self.request_timeout)
            .send()
            .await
            .with_context(|| format!("request for image {} failed", url))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("failed to read image {}", url))?;

        accept_image_response(url, status, bytes.len())?;

        log::debug!("[IMAGE_FETCH] {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_url() -> Url {
        Url::parse("https://sysbird.jp/toriko/img/1.jpg").unwrap()
    }

    #[test]
    fn test_accept_image_response_with_ok_and_bytes() {
        assert!(accept_image_response(&image_url(), StatusCode::OK, 512).is_ok());
    }

    #[test]
    fn test_accept_image_response_rejects_not_found() {
        let message = accept_image_response(&image_url(), StatusCode::NOT_FOUND, 120)
            .unwrap_err()
            .to_string();

        assert!(message.contains("404"));
        assert!(message.contains("1.jpg"));
    }

    #[test]
    fn test_accept_image_response_rejects_empty_body() {
        assert!(accept_image_response(&image_url(), StatusCode::OK, 0).is_err());
    }

    #[test]
    fn test_new_keeps_request_timeout() {
        let fetcher = ReqwestImageFetcher::new(Duration::from_secs(5));

        assert_eq!(fetcher.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_new_applies_settings_timeout() {
        let settings = crate::core::models::UserSettings {
            request_timeout_seconds: 0,
            ..Default::default()
        };

        let fetcher = ReqwestImageFetcher::new(settings.request_timeout());

        assert_eq!(fetcher.request_timeout(), Duration::from_secs(1));
    }
}
