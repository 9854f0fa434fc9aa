//! Term substitution
//!
//! Case-insensitive literal-substring replacement over plain text. The
//! replacement is always inserted with its canonical casing; the casing of
//! the matched source text is discarded.

use std::borrow::Cow;

use regex::{NoExpand, RegexBuilder};
use thiserror::Error;

use super::config::RewriteConfig;

/// Errors that can occur when building a term rewriter
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The target term is empty or whitespace-only
    #[error("target term must not be empty")]
    EmptyTarget,

    /// The replacement contains the target term, which would make
    /// repeated rewrites keep producing new matches
    #[error("replacement '{replacement}' contains target term '{target}'")]
    ReplacementContainsTarget {
        /// Configured target term
        target: String,
        /// Configured replacement term
        replacement: String,
    },

    /// The target term did not compile into a match pattern
    #[error("failed to compile pattern for '{target}': {message}")]
    InvalidPattern {
        /// Configured target term
        target: String,
        /// Compiler error detail
        message: String,
    },
}

/// Rewrites every case-insensitive occurrence of a target term
///
/// Matching is a plain substring scan: occurrences inside longer words are
/// replaced too. The pattern is compiled once at construction; substitution
/// itself cannot fail.
#[derive(Debug, Clone)]
pub struct TermRewriter {
    pattern: regex::Regex,
    replacement: String,
}

impl TermRewriter {
    /// Create a rewriter from a validated configuration
    pub fn new(config: &RewriteConfig) -> Result<Self, RewriteError> {
        config.validate()?;

        let pattern = RegexBuilder::new(&regex::escape(&config.target_term))
            .case_insensitive(true)
            .build()
            .map_err(|e| RewriteError::InvalidPattern {
                target: config.target_term.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            pattern,
            replacement: config.replacement_term.clone(),
        })
    }

    /// Replace all matches, borrowing the input when nothing matched
    pub fn replace<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // NoExpand keeps the replacement a fixed string even if it
        // contains `$`
        self.pattern.replace_all(text, NoExpand(&self.replacement))
    }

    /// Replace all matches, returning an owned string
    pub fn substitute(&self, text: &str) -> String {
        self.replace(text).into_owned()
    }

    /// Whether the text contains at least one match
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
