// Entry point of the Azure DevOps project lister.
//
// **Architecture Overview:**
// - `core/` = Business logic (no HTTP, no console)
// - `infra/` = Implementations of core traits (environment, HTTP API)
// - `console/` = Rendering of results for stdout
//
// This file's job is to:
// 1. Set up logging
// 2. Wire the services together (dependency injection)
// 3. Print the result and pick the exit code

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "console/console_layer.rs"]
mod console;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::core::projects::ProjectLister;
use crate::infra::config::env_source::EnvConfigSource;
use crate::infra::devops::devops_client::DevOpsApiClient;

const ENV_FILE: &str = ".env";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr; stdout is reserved for the listing itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let source = EnvConfigSource::load(ENV_FILE);
    let client = DevOpsApiClient::new().context("Failed to create Azure DevOps HTTP client")?;
    let lister = ProjectLister::new(client, source);

    let result = lister.run().await;

    let mut stdout = std::io::stdout().lock();
    console::write_listing(&mut stdout, &result).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    // Non-zero exit on a missing credential or when every version failed.
    let listed = result
        .as_ref()
        .is_ok_and(|report| report.outcome().is_ok());

    Ok(if listed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
