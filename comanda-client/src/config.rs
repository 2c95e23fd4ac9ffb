//! Client configuration

use crate::cache::DEFAULT_CACHE_TIMEOUT_MS;

/// Client configuration for connecting to the back-office API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Auth token sent in the `x-auth` header
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Cache timeout for the fetch-through stores, in milliseconds
    pub cache_timeout_ms: i64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
        }
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the store cache timeout
    pub fn with_cache_timeout_ms(mut self, millis: i64) -> Self {
        self.cache_timeout_ms = millis;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> Result<crate::HttpClient, crate::ClientError> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("https://api.example.com")
            .with_token("t0k3n")
            .with_timeout(10)
            .with_cache_timeout_ms(60_000);

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.token.as_deref(), Some("t0k3n"));
        assert_eq!(config.timeout, 10);
        assert_eq!(config.cache_timeout_ms, 60_000);
    }

    #[test]
    fn test_default_cache_timeout_is_five_minutes() {
        assert_eq!(ClientConfig::default().cache_timeout_ms, 5 * 60 * 1000);
    }
}
