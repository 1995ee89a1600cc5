//! Payment transactions and the checkout session exchange
//!
//! Payment records are written by the server when a checkout session is
//! created and updated when its status is checked; the client only reads
//! them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::constants::CHECKOUT_PAID_STATUS;
use crate::impl_domain_status_conversions;
use crate::utils::timestamps::deserialize_lenient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl_domain_status_conversions!(Currency {
    Usd => "usd",
    Eur => "eur",
    Gbp => "gbp",
});

/// Direction of the money flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Money received from clients
    #[default]
    Received,
    /// Money sent to freelancers or staff
    Sent,
}

impl_domain_status_conversions!(PaymentType {
    Received => "received",
    Sent => "sent",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl_domain_status_conversions!(PaymentStatus {
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
    Cancelled => "cancelled",
});

/// Server-owned payment transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    #[serde(default)]
    pub payment_type: PaymentType,
    pub amount: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub team_member_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub team_member_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub stripe_session_id: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

impl PaymentRecord {
    /// Client name for received payments, member name for sent ones.
    pub fn counterparty(&self) -> Option<&str> {
        self.client_name.as_deref().or(self.team_member_name.as_deref())
    }
}

impl Resource for PaymentRecord {
    const COLLECTION_PATH: &'static str = "/api/payments";
    const LABEL: &'static str = "payment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/payments/v1/checkout/session`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub amount: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Redirect target issued by the server for an external payment flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

/// Result of `GET /api/payments/v1/checkout/status/:session_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    /// Smallest currency unit, as reported by the payment provider
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CheckoutStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == CHECKOUT_PAID_STATUS
    }
}
