//! Configuration for content fetching
//!
//! Defines settings for the outbound HTTP client and URL screening.

use std::env;

/// Configuration for content fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Timeout per fetch in seconds (default: 10)
    pub timeout_secs: u64,
    /// Maximum redirects to follow (default: 5)
    pub max_redirects: usize,
    /// User agent sent with outbound requests
    pub user_agent: String,
    /// Allow fetching from localhost and private-range hosts
    /// (default: false; tests and local development enable it)
    pub allow_private_hosts: bool,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5)
                .min(10), // Cap at 10
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or_else(|_| {
                "Mozilla/5.0 (compatible; Faleproxy/1.0; +https://fabstir.com)".to_string()
            }),
            allow_private_hosts: env::var("FETCH_ALLOW_PRIVATE_HOSTS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: 5,
            user_agent: "Mozilla/5.0 (compatible; Faleproxy/1.0; +https://fabstir.com)"
                .to_string(),
            allow_private_hosts: false,
        }
    }
}
