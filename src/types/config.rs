//! Client configuration

use super::constants::{DEFAULT_API_VERSION, DEFAULT_HOST};
use crate::{ProcessOutError, Result};
use std::env;
use std::time::Duration;

/// Configuration for a [`ProcessOut`](crate::ProcessOut) client
///
/// Set once at construction; the client never mutates it.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub host: String,
    /// Value sent in the `API-Version` header
    pub api_version: String,
    /// Project ID, used as the basic auth username
    pub project_id: String,
    /// Project secret, used as the basic auth password
    pub project_secret: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("project_id", &self.project_id)
            .field("project_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config for the given project credentials
    pub fn new(project_id: impl Into<String>, project_secret: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            project_id: project_id.into(),
            project_secret: project_secret.into(),
            timeout: None,
        }
    }

    /// Create a config from `PROCESSOUT_*` environment variables
    ///
    /// `PROCESSOUT_PROJECT_ID` and `PROCESSOUT_PROJECT_SECRET` are required;
    /// `PROCESSOUT_HOST`, `PROCESSOUT_API_VERSION` and
    /// `PROCESSOUT_TIMEOUT_SECS` override the defaults when set.
    pub fn from_env() -> Result<Self> {
        let project_id = env::var("PROCESSOUT_PROJECT_ID").unwrap_or_default();
        let project_secret = env::var("PROCESSOUT_PROJECT_SECRET").unwrap_or_default();

        let mut config = Self::new(project_id, project_secret);

        if let Ok(host) = env::var("PROCESSOUT_HOST") {
            config = config.with_host(host);
        }
        if let Ok(version) = env::var("PROCESSOUT_API_VERSION") {
            config = config.with_api_version(version);
        }
        if let Ok(secs) = env::var("PROCESSOUT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ProcessOutError::config(format!("Invalid PROCESSOUT_TIMEOUT_SECS: {}", secs))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.project_id.is_empty() || self.project_secret.is_empty() {
            return Err(ProcessOutError::config(
                "Missing credentials: project ID and project secret must be set",
            ));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ProcessOutError::config(
                "API host must start with http:// or https://",
            ));
        }

        url::Url::parse(&self.host)
            .map_err(|e| ProcessOutError::config(format!("Invalid API host: {}", e)))?;

        if self.api_version.is_empty() {
            return Err(ProcessOutError::config("API version cannot be empty"));
        }

        Ok(())
    }

    /// Set the API host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
