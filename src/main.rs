use std::process;

use clap::Parser;
use colored::Colorize;

use linkdeck::cli::Cli;
use linkdeck::runtime::{Mode, detect_mode, prepare_startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mode = detect_mode(cli.command.as_ref());
    let ctx = match prepare_startup(cli.config.as_deref(), mode) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let code = match (mode, cli.command) {
        #[cfg(feature = "tui")]
        (Mode::Tui, _) => match linkdeck::runtime::modes::run_tui(ctx.config.clone()).await {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!("TUI exited with error: {:#}", e);
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                1
            }
        },
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(command)) => {
            match linkdeck::runtime::modes::run_cli(command, ctx.config.clone()).await {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    1
                }
            }
        }
        _ => {
            eprintln!(
                "{} no run mode available; rebuild with the `cli` or `tui` feature",
                "Error:".red().bold()
            );
            2
        }
    };

    // 退出前释放日志 guard，确保缓冲的日志写入
    drop(ctx);
    process::exit(code);
}
