//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.rebootmotion.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MOTION_API_BASE_URL";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the motion-analysis API.
///
/// Built once at startup and handed to the client; nothing re-reads the
/// environment afterwards. A missing API key is not an error here: requests
/// are sent without the `x-api-key` header and the server rejects them.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the production API with the given key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            ..Default::default()
        }
    }

    /// Reads `API_KEY` and `MOTION_API_BASE_URL` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::new(std::env::var(API_KEY_ENV).ok());
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    /// Set the base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout (`None` waits indefinitely).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
