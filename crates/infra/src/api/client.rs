//! API client for the BizHub backend
//!
//! Every call is sent once, with the stored bearer token when one exists and
//! the configured `Origin` header.

use std::sync::Arc;
use std::time::Duration;

use bizhub_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_APP_ORIGIN};
use bizhub_domain::ApiConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::auth::AccessTokenProvider;
use super::errors::{ApiError, ApiErrorCategory};
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "http://localhost:8001")
    pub base_url: String,
    /// Sent as the `Origin` header
    pub origin: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            origin: DEFAULT_APP_ORIGIN.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            origin: api.origin.clone(),
            timeout: Duration::from_secs(api.timeout_secs),
        }
    }
}

/// API client
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HttpClient cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client, auth, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Execute a GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        let result = Self::decode(response, path).await?;
        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// GET that treats 401/403/404 as "nothing there"
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::Auth(_) | ApiError::NotFound(_)) => {
                debug!(path = %path, "resource absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Execute a POST request
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        let result = Self::decode(response, path).await?;
        info!(path = %path, "POST request successful");
        Ok(result)
    }

    /// Execute a PUT request
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        let result = Self::decode(response, path).await?;
        info!(path = %path, "PUT request successful");
        Ok(result)
    }

    /// Execute a DELETE request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        let result = Self::decode(response, path).await?;
        info!(path = %path, "DELETE request successful");
        Ok(result)
    }

    /// Health check for API
    ///
    /// # Returns
    ///
    /// `true` if `/api/health` answers with a success status
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = format!("{}/api/health", self.config.base_url);

        debug!(url = %url, "Health check");

        let timeout = Duration::from_secs(5);
        let request = self.http_client.request(Method::GET, &url);
        let response = tokio::time::timeout(timeout, self.http_client.send(request))
            .await
            .map_err(|_| {
                warn!("Health check timeout");
                ApiError::Timeout(timeout)
            })?;

        match response {
            Ok(resp) if resp.status().is_success() => {
                info!("API is healthy");
                Ok(true)
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "API returned non-success status");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                Err(ApiError::from(e))
            }
        }
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(url = %url, %method, "API request");

        // Read per request so login/logout apply immediately
        let token = self.auth.access_token().await?;

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ORIGIN, &self.config.origin)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.http_client.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(Self::failed(path, ApiError::from(err))),
            Err(_) => return Err(Self::failed(path, ApiError::Timeout(timeout))),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::failed(path, Self::map_status_error(status, &url, body)));
        }
        Ok(response)
    }

    fn failed(path: &str, err: ApiError) -> ApiError {
        let category = err.category();
        // 401/403 is routine for a stale token.
        if category == ApiErrorCategory::Authentication {
            debug!(path = %path, category = category.as_str(), error = %err, "API request denied");
        } else {
            warn!(path = %path, category = category.as_str(), error = %err, "API request failed");
        }
        err
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
        let status = response.status();

        // Handle 204/205 No Content responses
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "{} answered {} with no body, but a body was expected",
                    path,
                    status.as_u16()
                ))
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        let value = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ApiError::Decode(format!("{}: invalid JSON: {}", path, e)))?
        };
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}
