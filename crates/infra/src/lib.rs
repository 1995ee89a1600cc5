//! # BizHub Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP gateways for the backend API
//! - Key-value storage (JSON file, in-memory)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `bizhub-core`
//! - Depends on `bizhub-domain` and `bizhub-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiAuthGateway, ApiClient, ApiClientConfig, ApiDashboardGateway, ApiEntityGateway, ApiError,
    ApiIntegrationGateway, ApiPaymentGateway, StoredTokenProvider,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
