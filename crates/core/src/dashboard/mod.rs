//! Dashboard counters and upcoming meetings

pub mod ports;
pub mod service;

pub use service::DashboardService;
