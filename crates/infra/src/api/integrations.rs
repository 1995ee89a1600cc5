use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::IntegrationGateway;
use bizhub_domain::{ConnectIntegrationRequest, Integration, IntegrationType, Result};
use serde_json::Value;

use super::client::ApiClient;

const INTEGRATIONS_PATH: &str = "/api/integrations";

pub struct ApiIntegrationGateway {
    client: Arc<ApiClient>,
}

impl ApiIntegrationGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntegrationGateway for ApiIntegrationGateway {
    async fn list(&self) -> Result<Vec<Integration>> {
        Ok(self.client.get(INTEGRATIONS_PATH).await?)
    }

    async fn connect(&self, request: &ConnectIntegrationRequest) -> Result<()> {
        let _: Value = self.client.post(INTEGRATIONS_PATH, request).await?;
        Ok(())
    }

    async fn disconnect(&self, integration_type: IntegrationType) -> Result<()> {
        let path = format!("{INTEGRATIONS_PATH}/{}", integration_type.as_str());
        let _: Value = self.client.delete(&path).await?;
        Ok(())
    }
}
