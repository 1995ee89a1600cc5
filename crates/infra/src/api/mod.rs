//! Backend API client and gateways
//!
//! This module provides the HTTP-backed implementations of the core ports.
//!
//! # Architecture
//!
//! - Uses the shared HttpClient (no direct reqwest)
//! - Bearer token read from the key-value store on every request
//! - One attempt per call, bounded by the configured timeout
//! - `ApiError` is converted into `BizHubError` at the gateway boundary

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod entities;
pub mod errors;
pub mod integrations;
pub mod payments;
pub mod session;

pub use auth::{AccessTokenProvider, AnonymousProvider, StoredTokenProvider};
pub use client::{ApiClient, ApiClientConfig};
pub use dashboard::ApiDashboardGateway;
pub use entities::ApiEntityGateway;
pub use errors::{ApiError, ApiErrorCategory};
pub use integrations::ApiIntegrationGateway;
pub use payments::ApiPaymentGateway;
pub use session::ApiAuthGateway;
