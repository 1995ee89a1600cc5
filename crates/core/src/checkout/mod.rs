//! Hosted checkout: request a payment, then resume on return

pub mod ports;
pub mod service;

pub use service::{session_id_from_url, CheckoutService};
