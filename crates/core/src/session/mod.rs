//! Session bootstrap and the login gate

pub mod ports;
pub mod service;

pub use service::{SessionService, SessionState};
