//! Error types for the ProcessOut client
//!
//! Every recoverable failure of an API call is a [`ProcessOutError`]. Misuse of
//! the call contract (more than one [`CallOptions`](crate::types::CallOptions)
//! value, identifiers that do not match a path template) is a programming
//! error and panics instead.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ProcessOutError>;

/// Errors returned by ProcessOut API calls
#[derive(Error, Debug)]
pub enum ProcessOutError {
    /// Request construction, network I/O or timeout failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response body was not a valid envelope
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// What went wrong while decoding
        reason: String,
        /// HTTP status of the response
        status: Option<u16>,
    },

    /// The API answered with `success: false`
    #[error("API error ({code}): {message}")]
    Api {
        /// Server-provided error type, e.g. `invoice.invalid_currency`
        code: String,
        /// Human-readable message
        message: String,
        /// HTTP status of the response
        status: Option<u16>,
    },

    /// Invalid client configuration or unknown operation
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },
}

/// Broad classification of an [`ProcessOutError::Api`] error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Credentials were rejected
    Authentication,
    /// The requested resource does not exist
    NotFound,
    /// The request parameters were rejected
    Validation,
    /// Too many requests
    RateLimited,
    /// The server failed to process the request
    Internal,
    /// Anything else
    Other,
}

impl ProcessOutError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(reason: impl Into<String>, status: Option<u16>) -> Self {
        Self::Decode {
            reason: reason.into(),
            status,
        }
    }

    /// Create an API error from an envelope's `error_type` and `message`
    pub fn api(code: impl Into<String>, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    /// Whether the request never produced a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the response could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The server error type, for API errors
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status associated with the error, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Decode { status, .. } => *status,
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify an API error by HTTP status, falling back to the error type
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        let Self::Api { code, status, .. } = self else {
            return None;
        };

        let kind = match status {
            Some(401) | Some(403) => ApiErrorKind::Authentication,
            Some(404) => ApiErrorKind::NotFound,
            Some(400) | Some(422) => ApiErrorKind::Validation,
            Some(429) => ApiErrorKind::RateLimited,
            Some(s) if *s >= 500 => ApiErrorKind::Internal,
            _ if code.starts_with("request.authentication") => ApiErrorKind::Authentication,
            _ if code.ends_with(".not-found") || code.ends_with(".not_found") => {
                ApiErrorKind::NotFound
            }
            _ => ApiErrorKind::Other,
        };
        Some(kind)
    }
}
