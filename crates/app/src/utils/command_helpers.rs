//! Command execution helpers
//!
//! Every command runs through [`execute_command`] so timing and outcome
//! logging look the same across the shell.

use std::future::Future;
use std::time::Instant;

use bizhub_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_clients(ctx: &AppContext) -> Result<Vec<Client>> {
///     execute_command("clients::list", || ctx.clients.list()).await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;

    let error_type = result.as_ref().err().map(|err| err.label());
    log_command_execution(command_name, start.elapsed(), error_type);

    result
}
