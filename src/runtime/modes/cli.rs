//! CLI mode
//!
//! Runs a single subcommand against the configured API and returns.

use std::sync::Arc;

use tracing::debug;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Run CLI mode
pub async fn run_cli(command: Commands, config: Arc<StaticConfig>) -> Result<(), CliError> {
    debug!("CLI mode against {}", config.api.base_url);
    crate::interfaces::cli::run_cli_command(command, config).await
}
