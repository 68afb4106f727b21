//! API endpoint configuration.
//!
//! Holds the base URL every request path is appended to.

use std::fmt;
use std::str::FromStr;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.accessgrid.com";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ACCESSGRID_BASE_URL";

/// Base URL of the remote API, normalized without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Create an endpoint from a base URL.
    ///
    /// Trailing slashes are stripped.
    ///
    /// # Errors
    /// Returns `ParseEndpointError` if the URL is empty or not http(s).
    pub fn new(base_url: &str) -> Result<Self, ParseEndpointError> {
        base_url.parse()
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a request path onto the base URL.
    ///
    /// A leading slash is added to `path` if it lacks one.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Returns true if this is the production endpoint.
    pub fn is_production(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }

    /// Load endpoint from `ACCESSGRID_BASE_URL` env var.
    ///
    /// Returns the production endpoint if the variable is unset or blank.
    ///
    /// # Errors
    /// Returns `ParseEndpointError` if the variable is set to an invalid URL.
    pub fn from_env() -> Result<Self, ParseEndpointError> {
        dotenvy::dotenv().ok();

        Self::from_setting(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    fn from_setting(value: Option<&str>) -> Result<Self, ParseEndpointError> {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => url.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let lower = trimmed.to_lowercase();

        let host = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() => Ok(Self {
                base_url: trimmed.to_string(),
            }),
            _ => Err(ParseEndpointError(s.to_string())),
        }
    }
}

/// Error parsing a base URL.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid base URL '{0}', expected an http:// or https:// URL")]
pub struct ParseEndpointError(String);
