//! Logging system initialization
//!
//! Sets up `tracing` according to the loaded configuration. The TUI owns the
//! terminal, so in that mode logs always go to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{LinkdeckError, Result};

/// TUI 模式下未配置日志文件时使用的默认文件
pub const DEFAULT_TUI_LOG_FILE: &str = "linkdeck.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File { path: String, rotate: bool },
}

/// Decide the log target for a run mode
///
/// CLI keeps stderr unless a file is configured; TUI always uses a file.
pub fn resolve_target(config: &LoggingConfig, tui_mode: bool) -> LogTarget {
    match config.file.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => LogTarget::File {
            path: path.to_string(),
            rotate: config.enable_rotation,
        },
        _ if tui_mode => LogTarget::File {
            path: DEFAULT_TUI_LOG_FILE.to_string(),
            rotate: false,
        },
        _ => LogTarget::Stderr,
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// **Note**: This should be called only once during application startup.
pub fn init_logging(config: &LoggingConfig, tui_mode: bool) -> Result<WorkerGuard> {
    let target = resolve_target(config, tui_mode);

    let writer: Box<dyn std::io::Write + Send + Sync> = match &target {
        LogTarget::File { path, rotate: true } => {
            let file_path = Path::new(path);
            let dir = file_path.parent().unwrap_or(Path::new("."));
            let prefix = file_path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_TUI_LOG_FILE)
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    LinkdeckError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        LogTarget::File {
            path,
            rotate: false,
        } => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        LogTarget::Stderr => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stderr);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| LinkdeckError::config(format!("Failed to set logger: {}", e)))?;

    Ok(guard)
}
