//! Single execution path shared by every API operation

use crate::operations::Operation;
use crate::types::constants::{headers, user_agent};
use crate::types::{options, CallOptions, ClientConfig, Envelope};
use crate::{ProcessOutError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Runs one operation: builds the request, sends it once and decodes the
/// response envelope
#[derive(Clone)]
pub struct RequestExecutor {
    /// Immutable client configuration
    config: Arc<ClientConfig>,
    /// HTTP client
    client: Client,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .finish()
    }
}

impl RequestExecutor {
    /// Create a new executor
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate configuration first
        config.validate()?;

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| ProcessOutError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Configuration this executor was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute `operation` and return its decoded payload
    ///
    /// `ids` fill the path template, `fields` are the resource fields of the
    /// body. At most one options value may be passed.
    ///
    /// # Panics
    ///
    /// Panics when `options` holds more than one value or when `ids` does not
    /// match the operation's path template.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        ids: &[&str],
        fields: Map<String, Value>,
        options: &[CallOptions],
    ) -> Result<T> {
        let opt = options::resolve(options);
        let path = operation.render_path(ids);
        let url = format!("{}{}", self.config.host, path);

        let mut body = fields;
        opt.write_body_fields(&mut body, operation.paginated);
        let body = serde_json::to_vec(&body)?;

        tracing::debug!("Sending {} request to: {}", operation.method, url);
        if !opt.disable_logging {
            tracing::trace!(
                "Request body for {}: {}",
                operation.name,
                String::from_utf8_lossy(&body)
            );
        }

        let mut request = self
            .client
            .request(operation.method.clone(), &url)
            .basic_auth(&self.config.project_id, Some(&self.config.project_secret))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, user_agent())
            .header(headers::API_VERSION, &self.config.api_version)
            .body(body);

        if let Some(key) = opt.idempotency_header() {
            request = request.header(headers::IDEMPOTENCY_KEY, key);
        }
        if opt.disable_logging {
            request = request.header(headers::DISABLE_LOGGING, "true");
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let envelope =
            Envelope::<T>::decode(&bytes, operation.payload.key(), Some(status)).map_err(|e| {
                tracing::error!(
                    "Undecodable response for {} (status {}): {}",
                    operation.name,
                    status,
                    e
                );
                e
            })?;

        if !envelope.success {
            tracing::warn!(
                "{} failed with status {}: {} ({})",
                operation.name,
                status,
                envelope.message,
                envelope.error_type
            );
        }

        envelope.into_result(Some(status))
    }
}
