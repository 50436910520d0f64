//! Client configuration
//!
//! All client settings live in an explicit [`ClientConfig`] handed to the
//! client at construction. There is no process-wide default client.

use crate::error::{Error, Result};
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.onfido.com/v3";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "ONFIDO_TOKEN";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV: &str = "ONFIDO_ENDPOINT";

/// Configuration for the API client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL relative request paths are resolved against
    pub endpoint: String,
    /// Bearer token sent with every request
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with default settings for the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("onfido-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(token),
        }
    }

    /// Load the config from `ONFIDO_TOKEN` and, optionally, `ONFIDO_ENDPOINT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field(TOKEN_ENV))?;

        let mut builder = Self::builder(token);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.trim().is_empty()) {
            builder = builder.endpoint(endpoint);
        }
        builder.validate()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }

    /// Build the config, checking that the endpoint is an absolute URL
    pub fn validate(self) -> Result<ClientConfig> {
        let url = url::Url::parse(&self.config.endpoint)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "endpoint '{}' cannot be used as a base URL",
                self.config.endpoint
            )));
        }
        Ok(self.config)
    }
}
