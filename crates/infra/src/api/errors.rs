//! API-specific error types
//!
//! Classifies HTTP outcomes for logging. Control flow only ever looks at
//! success versus failure; there is no retry.

use std::time::Duration;

use bizhub_domain::BizHubError;
use thiserror::Error;

/// Categories of API errors for log labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
    /// Response body did not match the expected shape
    Decode,
}

impl ApiErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::RateLimit => "rate_limit",
            Self::Server => "server",
            Self::Client => "client",
            Self::Network => "network",
            Self::Config => "config",
            Self::Decode => "decode",
        }
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::NotFound(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
            Self::Decode(_) => ApiErrorCategory::Decode,
        }
    }
}

/// Convert from BizHubError (HTTP transport failures) to ApiError
impl From<BizHubError> for ApiError {
    fn from(err: BizHubError) -> Self {
        match err {
            BizHubError::Network(msg) => Self::Network(msg),
            BizHubError::Auth(msg) => Self::Auth(msg),
            BizHubError::Config(msg) => Self::Config(msg),
            BizHubError::NotFound(msg) => Self::NotFound(msg),
            BizHubError::InvalidInput(msg) => Self::Client(msg),
            BizHubError::Storage(msg) | BizHubError::Internal(msg) => Self::Server(msg),
        }
    }
}

/// Gateways hand domain errors to core services
impl From<ApiError> for BizHubError {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::Auth(_) => Self::Auth(message),
            ApiError::NotFound(_) => Self::NotFound(message),
            ApiError::Client(_) => Self::InvalidInput(message),
            ApiError::Config(_) => Self::Config(message),
            ApiError::Decode(_) => Self::Internal(message),
            ApiError::RateLimit(_)
            | ApiError::Server(_)
            | ApiError::Network(_)
            | ApiError::Timeout(_) => Self::Network(message),
        }
    }
}
