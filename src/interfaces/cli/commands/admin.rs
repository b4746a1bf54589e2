//! Admin commands
//!
//! 先检查会话是否为管理员，再调用管理接口

use colored::Colorize;

use super::output::{print_link_detail, print_link_line};
use crate::auth::AuthGate;
use crate::i18n::{Msg, t};
use crate::interfaces::cli::{CliContext, CliError};

async fn ensure_admin(ctx: &CliContext) -> Result<(), CliError> {
    let mut gate = AuthGate::new();
    gate.check(ctx.store.api().as_ref()).await;
    gate.require_admin().map(|_| ()).map_err(|e| {
        CliError::CommandError(format!(
            "{} ({})",
            t(ctx.language(), Msg::AdminOnly),
            e.message()
        ))
    })
}

pub async fn admin_search(ctx: &mut CliContext, query: &str, page: u64) -> Result<(), CliError> {
    ensure_admin(ctx).await?;
    ctx.store.admin_search(query, page).await?;

    let results = ctx.store.admin_results();
    if results.is_empty() {
        println!("{} No links match '{}'", "ℹ".bold().blue(), query);
        return Ok(());
    }
    println!("{} '{}':", "Search results for".bold().green(), query);
    println!();
    for entry in results {
        print_link_line(entry);
    }
    println!();
    let pagination = ctx.store.admin_pagination();
    println!(
        "{} Page {}/{}, {} matches",
        "ℹ".bold().blue(),
        pagination.current_page(),
        pagination.total_pages(ctx.store.admin_total()),
        ctx.store.admin_total().to_string().green()
    );
    Ok(())
}

pub async fn admin_disable(ctx: &mut CliContext, code: &str) -> Result<(), CliError> {
    ensure_admin(ctx).await?;
    ctx.store.admin_disable(code).await?;
    println!(
        "{} {}: {}",
        "✓".bold().green(),
        t(ctx.language(), Msg::LinkDisabled),
        code.cyan()
    );
    Ok(())
}

pub async fn admin_view(ctx: &mut CliContext, code: &str) -> Result<(), CliError> {
    ensure_admin(ctx).await?;
    let entry = ctx.store.admin_view(code).await?;
    print_link_detail(&entry, &ctx.config.api);
    Ok(())
}
