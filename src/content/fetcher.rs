//! HTTP content fetching
//!
//! Fetches raw page content from user-supplied URLs. The fetcher does not
//! retry or interpret upstream responses beyond success/failure; that policy
//! belongs to the HTTP layer.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::ContentFetchConfig;

/// Content fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),

    /// URL did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL is unsafe (bad scheme, localhost, private IP)
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),
}

/// Content fetcher around a shared reqwest client
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the raw body of a page as a string
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.check_url(url)?;

        debug!("Fetching content from: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        info!("Fetched {} bytes from: {}", html.len(), url);

        Ok(html)
    }

    /// Validate a URL before fetching
    fn check_url(&self, url: &str) -> Result<(), FetchError> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{} ({})", url, e)))?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        if !self.config.allow_private_hosts {
            if let Some(host) = parsed.host_str() {
                if is_private_host(host) {
                    return Err(FetchError::UnsafeUrl(url.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}

/// Check whether a host names localhost or a private/link-local address
pub fn is_private_host(host: &str) -> bool {
    let host = host.to_lowercase();
    if host == "localhost" {
        return true;
    }

    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
        }
        Ok(IpAddr::V6(v6)) => v6.is_loopback() || v6.is_unspecified(),
        Err(_) => false,
    }
}
