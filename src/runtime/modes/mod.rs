//! Mode routing
//!
//! This module provides unified entry points for the two execution modes:
//! - CLI mode (one command, then exit)
//! - TUI mode (interactive terminal console)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::panic_handler::RunMode;

/// Mode detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// 日志和 panic 处理按模式区分
    pub fn run_mode(self) -> RunMode {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
            _ => RunMode::Cli,
        }
    }

    pub fn is_tui(self) -> bool {
        self.run_mode() == RunMode::Tui
    }
}

/// Detect which mode to run from the parsed subcommand
///
/// # Mode Detection Logic
/// 1. `tui` or no subcommand, with the TUI feature -> TUI mode
/// 2. any other subcommand, with the CLI feature -> CLI mode
/// 3. otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
