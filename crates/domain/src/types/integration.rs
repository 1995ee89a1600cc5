//! Third-party service connections
//!
//! The integrations panel connects exactly three services. Credentials are
//! supplied by the client on connect; only the server keeps them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::impl_domain_status_conversions;
use crate::utils::timestamps::deserialize_lenient;

/// Placeholder token sent for OAuth-style services until a real grant flow
/// exists on the server.
pub const PLACEHOLDER_OAUTH_TOKEN: &str = "placeholder_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationType {
    Stripe,
    Gmail,
    GoogleCalendar,
}

impl_domain_status_conversions!(IntegrationType {
    Stripe => "stripe",
    Gmail => "gmail",
    GoogleCalendar => "google_calendar",
});

impl IntegrationType {
    /// Human-readable service name used in alerts and cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe",
            Self::Gmail => "Gmail",
            Self::GoogleCalendar => "Google Calendar",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Stripe => "Accept client payments through hosted checkout",
            Self::Gmail => "Sync client email threads",
            Self::GoogleCalendar => "Show upcoming meetings on the dashboard",
        }
    }

    /// Whether connecting requires the user to type a secret.
    pub fn prompts_for_secret(&self) -> bool {
        matches!(self, Self::Stripe)
    }

    /// Settings sent with a fresh connection.
    pub fn default_settings(&self) -> Value {
        match self {
            Self::Stripe => json!({ "mode": "test" }),
            Self::Gmail => json!({ "sync_interval": "hourly" }),
            Self::GoogleCalendar => json!({ "sync_interval": "daily" }),
        }
    }
}

/// Credential payload for each service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegrationCredentials {
    ApiKey { api_key: String },
    Token { token: String },
}

impl IntegrationCredentials {
    /// Credentials for services that do not prompt the user.
    pub fn placeholder() -> Self {
        Self::Token { token: PLACEHOLDER_OAUTH_TOKEN.to_string() }
    }
}

/// Body of `POST /api/integrations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectIntegrationRequest {
    pub integration_type: IntegrationType,
    pub credentials: IntegrationCredentials,
    pub settings: Value,
}

impl ConnectIntegrationRequest {
    pub fn new(integration_type: IntegrationType, credentials: IntegrationCredentials) -> Self {
        Self { integration_type, credentials, settings: integration_type.default_settings() }
    }
}

/// Stored connection record as listed by `GET /api/integrations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    #[serde(default)]
    pub id: Option<String>,
    pub integration_type: IntegrationType,
    #[serde(default)]
    pub is_connected: bool,
    #[serde(default)]
    pub settings: Value,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripe_connect_body_carries_key_and_test_mode() {
        let request = ConnectIntegrationRequest::new(
            IntegrationType::Stripe,
            IntegrationCredentials::ApiKey { api_key: "sk_test_123".into() },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "integration_type": "stripe",
                "credentials": { "api_key": "sk_test_123" },
                "settings": { "mode": "test" }
            })
        );
    }

    #[test]
    fn calendar_connect_body_uses_placeholder_token() {
        let request = ConnectIntegrationRequest::new(
            IntegrationType::GoogleCalendar,
            IntegrationCredentials::placeholder(),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["integration_type"], "google_calendar");
        assert_eq!(json["credentials"]["token"], PLACEHOLDER_OAUTH_TOKEN);
        assert_eq!(json["settings"]["sync_interval"], "daily");
    }

    #[test]
    fn only_stripe_prompts() {
        let prompting: Vec<_> =
            IntegrationType::ALL.iter().filter(|t| t.prompts_for_secret()).collect();
        assert_eq!(prompting, vec![&IntegrationType::Stripe]);
    }
}
