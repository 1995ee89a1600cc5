//! Domain records exchanged with the BizHub backend

pub mod client;
pub mod dashboard;
pub mod integration;
pub mod payment;
pub mod project;
pub mod team;
pub mod theme;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use client::Client;
pub use dashboard::{DashboardStats, UpcomingMeeting, UpcomingMeetings};
pub use integration::{
    ConnectIntegrationRequest, Integration, IntegrationCredentials, IntegrationType,
    PLACEHOLDER_OAUTH_TOKEN,
};
pub use payment::{
    CheckoutRequest, CheckoutSession, CheckoutStatus, Currency, PaymentRecord, PaymentStatus,
    PaymentType,
};
pub use project::{Project, ProjectStatus};
pub use team::{MemberType, TeamMember};
pub use theme::Theme;
pub use user::{AuthCodeExchange, AuthGrant, ProfileUpdate, User};

/// A server-owned record living under a REST collection
///
/// `COLLECTION_PATH` is the list/create endpoint; single records live at
/// `{COLLECTION_PATH}/{id}`.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const COLLECTION_PATH: &'static str;
    /// Lowercase singular noun for messages ("client", "team member").
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION_PATH, id)
    }
}
