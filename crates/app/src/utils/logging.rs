use std::time::Duration;

use bizhub_domain::LoggingConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so
/// command results on stdout stay clean. Calling this twice is a no-op.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"clients::add"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label when the command failed.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}
