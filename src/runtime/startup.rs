//! Pre-startup processing shared by both modes
//!
//! Loads configuration, sets up logging for the run mode and installs the
//! panic hook. The returned context must outlive the run so buffered log
//! lines are flushed.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use super::Mode;
use crate::config::{StaticConfig, get_config, init_config, set_config};
use crate::system::logging::init_logging;
use crate::system::panic_handler::install_panic_hook;

pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    pub mode: Mode,
    _log_guard: WorkerGuard,
}

/// 加载配置、初始化日志并安装 panic hook
pub fn prepare_startup(config_path: Option<&str>, mode: Mode) -> Result<StartupContext> {
    let start_time = Instant::now();

    match config_path {
        Some(path) => set_config(StaticConfig::load_from(path)),
        None => init_config(),
    }
    let config = get_config();

    let log_guard = init_logging(&config.logging, mode.is_tui())
        .context("Failed to initialize logging")?;
    install_panic_hook(mode.run_mode());

    info!(
        "linkdeck v{} starting in {:?} mode",
        env!("CARGO_PKG_VERSION"),
        mode
    );
    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        config,
        mode,
        _log_guard: log_guard,
    })
}
