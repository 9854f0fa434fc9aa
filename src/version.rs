// Version information for Faleproxy

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-text-rewrite-2025-08-06";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-06";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "case-insensitive-rewrite",
    "configurable-terms",
    "attribute-preservation",
    "comment-preservation",
    "title-extraction",
    "url-screening",
    "static-landing-page",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Faleproxy {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
