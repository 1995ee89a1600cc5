use bizhub_core::SessionState;
use bizhub_domain::{Result as DomainResult, User};
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Backend reachability and local session state
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub base_url: String,
    pub backend_reachable: bool,
    pub session: SessionState,
}

pub async fn status(ctx: &AppContext) -> DomainResult<StatusReport> {
    execute_command("session::status", || async {
        let backend_reachable = ctx.api.health_check().await.unwrap_or(false);
        Ok(StatusReport {
            base_url: ctx.api.base_url().to_string(),
            backend_reachable,
            session: ctx.session.state(),
        })
    })
    .await
}

/// Exchange an authorization code, then load the signed-in views.
pub async fn login(ctx: &AppContext, code: &str) -> DomainResult<User> {
    execute_command("session::login", || async {
        let user = ctx.session.login(code).await?;
        info!(user_id = %user.id, "signed in");
        ctx.refresh_all().await;
        Ok(user)
    })
    .await
}

pub async fn logout(ctx: &AppContext) -> DomainResult<()> {
    execute_command("session::logout", || async { ctx.session.logout() }).await
}

pub fn whoami(ctx: &AppContext) -> Option<User> {
    ctx.session.user()
}
