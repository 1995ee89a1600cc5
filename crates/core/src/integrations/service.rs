//! Integrations panel service

use std::sync::Arc;

use bizhub_domain::{
    ConnectIntegrationRequest, Integration, IntegrationCredentials, IntegrationType, Result,
};
use parking_lot::RwLock;
use tracing::{info, warn};

use super::ports::IntegrationGateway;
use crate::entities::RemoveOutcome;
use crate::interaction_ports::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    /// The credential prompt was cancelled or left empty; nothing was sent.
    Cancelled,
    Failed,
}

pub struct IntegrationsPanel {
    gateway: Arc<dyn IntegrationGateway>,
    interaction: Arc<dyn Interaction>,
    integrations: RwLock<Vec<Integration>>,
}

impl IntegrationsPanel {
    pub fn new(gateway: Arc<dyn IntegrationGateway>, interaction: Arc<dyn Interaction>) -> Self {
        Self { gateway, interaction, integrations: RwLock::new(Vec::new()) }
    }

    pub async fn list(&self) -> Result<Vec<Integration>> {
        match self.gateway.list().await {
            Ok(items) => {
                *self.integrations.write() = items.clone();
                Ok(items)
            }
            Err(err) => {
                warn!(error = %err, "integrations list failed; keeping previous state");
                Err(err)
            }
        }
    }

    /// Gather credentials, connect, and alert the result.
    pub async fn connect(&self, integration_type: IntegrationType) -> ConnectOutcome {
        let Some(credentials) = self.credentials_for(integration_type) else {
            return ConnectOutcome::Cancelled;
        };
        let request = ConnectIntegrationRequest::new(integration_type, credentials);
        let name = integration_type.display_name();

        match self.gateway.connect(&request).await {
            Ok(()) => {
                info!(integration = %integration_type, "integration connected");
                self.interaction.alert(&format!("{name} connected successfully!"));
                let _ = self.list().await;
                ConnectOutcome::Connected
            }
            Err(err) => {
                warn!(integration = %integration_type, error = %err, "integration connect failed");
                self.interaction.alert(&format!("Failed to connect {name}"));
                ConnectOutcome::Failed
            }
        }
    }

    /// Ask first, then delete and re-fetch.
    pub async fn disconnect(&self, integration_type: IntegrationType) -> Result<RemoveOutcome> {
        let name = integration_type.display_name();
        if !self.interaction.confirm(&format!("Are you sure you want to disconnect {name}?")) {
            return Ok(RemoveOutcome::Declined);
        }

        self.gateway.disconnect(integration_type).await.map_err(|err| {
            warn!(integration = %integration_type, error = %err, "integration disconnect failed");
            err
        })?;
        info!(integration = %integration_type, "integration disconnected");
        let _ = self.list().await;
        Ok(RemoveOutcome::Removed)
    }

    /// Connected only when the fetched collection holds a connected record.
    pub fn is_connected(&self, integration_type: IntegrationType) -> bool {
        self.integrations
            .read()
            .iter()
            .any(|item| item.integration_type == integration_type && item.is_connected)
    }

    pub fn items(&self) -> Vec<Integration> {
        self.integrations.read().clone()
    }

    fn credentials_for(&self, integration_type: IntegrationType) -> Option<IntegrationCredentials> {
        if !integration_type.prompts_for_secret() {
            return Some(IntegrationCredentials::placeholder());
        }
        let message = format!("Enter your {} API key:", integration_type.display_name());
        self.interaction
            .prompt(&message)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|api_key| IntegrationCredentials::ApiKey { api_key })
    }
}
