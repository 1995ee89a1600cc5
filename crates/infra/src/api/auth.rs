//! Bearer token lookup for API requests
//!
//! The session token lives in the key-value store. It is read on every
//! request so a fresh login or logout applies to the next call.

use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::KeyValueStore;
use bizhub_domain::constants::SESSION_TOKEN_STORAGE_KEY;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, `None` when signed out.
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Reads the session token persisted by login
pub struct StoredTokenProvider {
    store: Arc<dyn KeyValueStore>,
}

impl StoredTokenProvider {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        let token = self
            .store
            .get(SESSION_TOKEN_STORAGE_KEY)
            .map_err(|e| ApiError::Config(format!("Failed to read session token: {}", e)))?;
        Ok(token.filter(|t| !t.is_empty()))
    }
}

/// No credentials (health checks, tests)
pub struct AnonymousProvider;

#[async_trait]
impl AccessTokenProvider for AnonymousProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}
