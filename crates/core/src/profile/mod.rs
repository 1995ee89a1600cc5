//! Profile/settings panel

pub mod service;

pub use service::ProfileService;
