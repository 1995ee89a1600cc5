//! Integrations panel: connect and disconnect third-party services

pub mod ports;
pub mod service;

pub use service::{ConnectOutcome, IntegrationsPanel};
