//! Protocol constants

/// Default API host
pub const DEFAULT_HOST: &str = "https://api.processout.com";

/// Default value of the `API-Version` header
pub const DEFAULT_API_VERSION: &str = "1.4.0.0";

/// Header names used by the API
pub mod headers {
    /// API version header
    pub const API_VERSION: &str = "API-Version";
    /// Idempotency key header, forwarded verbatim
    pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
    /// Asks the server not to log the request
    pub const DISABLE_LOGGING: &str = "Disable-Logging";
}

/// User agent sent with every request
pub fn user_agent() -> String {
    format!("processout-rust/{}", crate::VERSION)
}
