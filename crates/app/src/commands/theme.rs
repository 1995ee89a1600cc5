use bizhub_domain::{Result as DomainResult, Theme};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn toggle_theme(ctx: &AppContext) -> DomainResult<Theme> {
    execute_command("theme::toggle", || async { ctx.theme.toggle() }).await
}

pub fn current_theme(ctx: &AppContext) -> Theme {
    ctx.theme.current()
}
