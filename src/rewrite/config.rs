//! Configuration for term rewriting
//!
//! Defines the target/replacement term pair applied to page text.

use std::env;

use super::substitute::RewriteError;

/// Configuration for the term rewriter
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Term to match in page text, case-insensitively (default: "Yale")
    pub target_term: String,
    /// Replacement inserted verbatim for every match (default: "Fale")
    pub replacement_term: String,
}

impl RewriteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            target_term: env::var("REWRITE_TARGET_TERM").unwrap_or_else(|_| "Yale".to_string()),
            replacement_term: env::var("REWRITE_REPLACEMENT_TERM")
                .unwrap_or_else(|_| "Fale".to_string()),
        }
    }

    /// Validate configuration values
    ///
    /// A replacement that itself contains the target term would make the
    /// transform non-idempotent, so it is rejected here.
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.target_term.trim().is_empty() {
            return Err(RewriteError::EmptyTarget);
        }
        if self
            .replacement_term
            .to_lowercase()
            .contains(&self.target_term.to_lowercase())
        {
            return Err(RewriteError::ReplacementContainsTarget {
                target: self.target_term.clone(),
                replacement: self.replacement_term.clone(),
            });
        }
        Ok(())
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target_term: "Yale".to_string(),
            replacement_term: "Fale".to_string(),
        }
    }
}
