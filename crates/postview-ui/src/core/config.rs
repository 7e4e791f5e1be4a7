//! Runtime configuration for the UI and the parsing of its overrides.
//!
//! # Design
//! - Overrides arrive as raw strings (browser storage); invalid values fall back to defaults.
//! - Parsing stays here so it can be tested without a browser.

use postview_models::DEFAULT_API_URL;

/// Delay before the initial post request.
pub const DEFAULT_STARTUP_DELAY_MS: u32 = 2_000;
/// Upper bound accepted for a configured startup delay.
pub const MAX_STARTUP_DELAY_MS: u32 = 60_000;

/// Effective UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Base URL of the posts API.
    pub api_base_url: String,
    /// Delay before the initial post request, in milliseconds.
    pub startup_delay_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
        }
    }
}

impl UiConfig {
    /// Build a configuration from optional raw overrides.
    #[must_use]
    pub fn from_overrides(api_url: Option<&str>, startup_delay: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .and_then(normalize_api_url)
                .unwrap_or(defaults.api_base_url),
            startup_delay_ms: startup_delay
                .and_then(parse_startup_delay)
                .unwrap_or(defaults.startup_delay_ms),
        }
    }
}

/// Accept an HTTP(S) base URL, trimming whitespace and trailing slashes.
#[must_use]
pub fn normalize_api_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let is_http = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty());
    (is_http && has_host).then(|| trimmed.to_string())
}

/// Parse a startup delay in milliseconds, clamped to [`MAX_STARTUP_DELAY_MS`].
#[must_use]
pub fn parse_startup_delay(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .map(|value| value.min(MAX_STARTUP_DELAY_MS))
}
