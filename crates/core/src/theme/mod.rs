//! Light/dark theme preference

pub mod ports;
pub mod service;

pub use service::ThemeService;
