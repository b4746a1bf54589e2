//! Public short code lookup

use colored::Colorize;

use super::output::format_time;
use crate::interfaces::cli::{CliContext, CliError};

pub async fn resolve_code(
    ctx: &mut CliContext,
    code: &str,
    redirect: bool,
) -> Result<(), CliError> {
    if redirect {
        let location = ctx.store.redirect_target(code).await?;
        println!(
            "{} {} -> {}",
            "→".bold().blue(),
            code.cyan(),
            location.blue().underline()
        );
        return Ok(());
    }

    let resolved = ctx.store.resolve(code).await?;
    println!(
        "{} {} -> {}",
        "→".bold().blue(),
        resolved.short_code.cyan(),
        resolved.url.blue().underline()
    );
    if !resolved.enabled {
        println!("  {}", "disabled".red());
    }
    if let Some(from) = resolved.active_from {
        println!("  {} {}", "active from".dimmed(), format_time(from));
    }
    if let Some(until) = resolved.active_until {
        println!("  {} {}", "active until".dimmed(), format_time(until));
    }
    Ok(())
}
