use bizhub_core::{ConnectOutcome, RemoveOutcome};
use bizhub_domain::{BizHubError, IntegrationType, Result as DomainResult};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Connection status of one integration type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationStatus {
    pub integration_type: IntegrationType,
    pub connected: bool,
}

/// Every known integration type with its status from the last fetch.
pub fn integration_statuses(ctx: &AppContext) -> Vec<IntegrationStatus> {
    IntegrationType::ALL
        .iter()
        .map(|&integration_type| IntegrationStatus {
            integration_type,
            connected: ctx.integrations.is_connected(integration_type),
        })
        .collect()
}

pub async fn connect_integration(
    ctx: &AppContext,
    integration_type: IntegrationType,
) -> ConnectOutcome {
    let result = execute_command("integrations::connect", || async {
        match ctx.integrations.connect(integration_type).await {
            ConnectOutcome::Failed => Err(BizHubError::Network(format!(
                "Failed to connect {}",
                integration_type.display_name()
            ))),
            outcome => Ok(outcome),
        }
    })
    .await;
    result.unwrap_or(ConnectOutcome::Failed)
}

pub async fn disconnect_integration(
    ctx: &AppContext,
    integration_type: IntegrationType,
) -> DomainResult<RemoveOutcome> {
    execute_command("integrations::disconnect", || async {
        ctx.integrations.disconnect(integration_type).await
    })
    .await
}
