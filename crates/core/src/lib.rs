//! # BizHub Core
//!
//! Pure client logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the backend, storage and the user
//! - Services holding view state: session, theme, entity modules, checkout,
//!   integrations, dashboard and profile
//!
//! ## Architecture Principles
//! - Only depends on `bizhub-domain`
//! - No HTTP, file or terminal code
//! - All external dependencies via traits
//! - State behind short-lived locks, never held across an await

pub mod checkout;
pub mod dashboard;
pub mod entities;
pub mod integrations;
pub mod profile;
pub mod session;
pub mod theme;

// Infrastructure ports
pub mod interaction_ports;
pub mod storage_ports;

pub use checkout::ports::CheckoutGateway;
pub use checkout::CheckoutService;
pub use dashboard::ports::DashboardGateway;
pub use dashboard::DashboardService;
pub use entities::{
    CollectionReader, EntityGateway, EntityModule, ListModule, RecordCache, RemoveOutcome,
};
pub use integrations::ports::IntegrationGateway;
pub use integrations::{ConnectOutcome, IntegrationsPanel};
pub use interaction_ports::{Interaction, Navigator};
pub use profile::ProfileService;
pub use session::ports::AuthGateway;
pub use session::{SessionService, SessionState};
pub use storage_ports::KeyValueStore;
pub use theme::ports::ThemeSurface;
pub use theme::ThemeService;
