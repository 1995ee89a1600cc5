//! BizHub - business-management client
//!
//! Main entry point for the terminal shell.

use anyhow::Context as _;
use bizhub_lib::cli::{self, Cli};
use bizhub_lib::utils::logging::init_tracing;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = bizhub_infra::config::load(cli.config.clone()).context("loading configuration")?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(cli::run(cli, config))
}
