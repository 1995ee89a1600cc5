use async_trait::async_trait;
use bizhub_domain::{CheckoutRequest, CheckoutSession, CheckoutStatus, Result};

#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession>;

    async fn session_status(&self, session_id: &str) -> Result<CheckoutStatus>;
}
