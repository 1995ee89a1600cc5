use async_trait::async_trait;
use bizhub_domain::{ConnectIntegrationRequest, Integration, IntegrationType, Result};

#[async_trait]
pub trait IntegrationGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Integration>>;

    async fn connect(&self, request: &ConnectIntegrationRequest) -> Result<()>;

    async fn disconnect(&self, integration_type: IntegrationType) -> Result<()>;
}
