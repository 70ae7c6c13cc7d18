//! Endpoint configuration: base URL plus auth credentials.
//!
//! The config is an explicit constructor input rather than process-wide
//! state, so tests and multi-endpoint processes can each carry their own.

use crate::error::{Error, ErrorKind, Result};

/// Immutable endpoint configuration for the user-management API.
///
/// The password is redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone)]
pub struct EndpointConfig {
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl EndpointConfig {
    /// Create a new endpoint config.
    ///
    /// The base URL must be absolute; a trailing slash is trimmed so that
    /// joining any relative path segment yields a valid request URI.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Load the endpoint config from environment variables.
    ///
    /// Required environment variables:
    /// - `UM_BASE_URL`
    /// - `UM_USERNAME`
    /// - `UM_PASSWORD`
    ///
    /// A missing variable fails immediately, before any network call.
    pub fn from_env() -> Result<Self> {
        let base_url = require_var("UM_BASE_URL")?;
        let username = require_var("UM_USERNAME")?;
        let password = require_var("UM_PASSWORD")?;
        Self::new(base_url, username, password)
    }

    /// Get the base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the configured password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Build the full URL for a relative path segment.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| Error::new(ErrorKind::Config(format!("{} is not set", name))))
}
