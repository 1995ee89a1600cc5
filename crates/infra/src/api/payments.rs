//! Payment records and hosted checkout

use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::{CheckoutGateway, CollectionReader};
use bizhub_domain::{
    CheckoutRequest, CheckoutSession, CheckoutStatus, PaymentRecord, Resource, Result,
};

use super::client::ApiClient;

const CHECKOUT_SESSION_PATH: &str = "/api/payments/v1/checkout/session";
const CHECKOUT_STATUS_PATH: &str = "/api/payments/v1/checkout/status";

pub struct ApiPaymentGateway {
    client: Arc<ApiClient>,
}

impl ApiPaymentGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectionReader<PaymentRecord> for ApiPaymentGateway {
    async fn list(&self) -> Result<Vec<PaymentRecord>> {
        Ok(self.client.get(PaymentRecord::COLLECTION_PATH).await?)
    }

    async fn get(&self, id: &str) -> Result<PaymentRecord> {
        Ok(self.client.get(&PaymentRecord::item_path(id)).await?)
    }
}

#[async_trait]
impl CheckoutGateway for ApiPaymentGateway {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        Ok(self.client.post(CHECKOUT_SESSION_PATH, request).await?)
    }

    async fn session_status(&self, session_id: &str) -> Result<CheckoutStatus> {
        Ok(self.client.get(&format!("{CHECKOUT_STATUS_PATH}/{session_id}")).await?)
    }
}
