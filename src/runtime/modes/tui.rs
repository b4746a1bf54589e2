//! TUI mode
//!
//! Delegates to the interactive terminal console.

use std::sync::Arc;

use crate::config::StaticConfig;

/// Run TUI mode
pub async fn run_tui(config: Arc<StaticConfig>) -> anyhow::Result<()> {
    crate::interfaces::tui::run_tui(config).await
}
