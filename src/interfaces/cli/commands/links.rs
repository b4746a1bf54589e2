//! Link management commands

use colored::Colorize;
use serde::Serialize;

use super::output::{format_time, print_link_detail, print_link_line, security_label};
use crate::api::LinkEntry;
use crate::forms::{self, LinkForm};
use crate::i18n::{Msg, t};
use crate::interfaces::cli::{CliContext, CliError};

/// add / update 共用的字段参数，未给出的字段保持原值
#[derive(Debug, Default)]
pub struct LinkArgs {
    pub url: Option<String>,
    pub description: Option<String>,
    pub from: Option<String>,
    pub until: Option<String>,
    pub enabled: Option<bool>,
    pub with_logo: Option<bool>,
    pub subtitle: Option<String>,
    pub clear_window: bool,
}

impl LinkArgs {
    pub fn apply(self, form: &mut LinkForm) {
        if let Some(url) = self.url {
            form.url = url;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if self.clear_window {
            form.active_from.clear();
            form.active_until.clear();
        }
        if let Some(from) = self.from {
            form.active_from = from;
        }
        if let Some(until) = self.until {
            form.active_until = until;
        }
        if let Some(enabled) = self.enabled {
            form.enabled = enabled;
        }
        if let Some(with_logo) = self.with_logo {
            form.with_logo = with_logo;
        }
        if let Some(subtitle) = self.subtitle {
            form.subtitle = subtitle;
        }
    }
}

pub async fn list_links(
    ctx: &mut CliContext,
    page: u64,
    page_size: Option<u64>,
    csv: Option<String>,
) -> Result<(), CliError> {
    if let Some(size) = page_size {
        ctx.store.set_page_size(size);
    }
    ctx.store.load_page(page).await?;

    if let Some(path) = csv {
        let written = export_csv(ctx.store.links(), &path)?;
        println!(
            "{} Exported {} links to {}",
            "✓".bold().green(),
            written.to_string().green(),
            path.blue()
        );
        return Ok(());
    }

    let links = ctx.store.links();
    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for entry in links {
        print_link_line(entry);
    }
    println!();

    let pagination = ctx.store.pagination();
    println!(
        "{} Page {}/{} ({} per page), total {} short links",
        "ℹ".bold().blue(),
        pagination.current_page(),
        pagination.total_pages(ctx.store.total()),
        pagination.page_size(),
        ctx.store.total().to_string().green()
    );
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    short_code: &'a str,
    url: &'a str,
    description: Option<&'a str>,
    enabled: bool,
    active_from: Option<String>,
    active_until: Option<String>,
    access_count: u64,
    security_level: Option<String>,
    created_at: String,
}

impl<'a> From<&'a LinkEntry> for CsvRow<'a> {
    fn from(entry: &'a LinkEntry) -> Self {
        Self {
            id: entry.id,
            short_code: &entry.short_code,
            url: &entry.url,
            description: entry.description.as_deref(),
            enabled: entry.enabled,
            active_from: entry.active_from.map(|d| d.to_rfc3339()),
            active_until: entry.active_until.map(|d| d.to_rfc3339()),
            access_count: entry.access_count,
            security_level: entry.security_level.map(|l| l.to_string()),
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// 导出当前页到 CSV，返回写入行数
pub fn export_csv(links: &[LinkEntry], path: &str) -> Result<usize, CliError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| CliError::CommandError(format!("Failed to create {}: {}", path, e)))?;
    for entry in links {
        writer
            .serialize(CsvRow::from(entry))
            .map_err(|e| CliError::CommandError(format!("Failed to write row: {}", e)))?;
    }
    writer
        .flush()
        .map_err(|e| CliError::CommandError(format!("Failed to flush {}: {}", path, e)))?;
    Ok(links.len())
}

pub async fn show_link(ctx: &mut CliContext, id: i64) -> Result<(), CliError> {
    let entry = ctx.store.fetch(id).await?;
    print_link_detail(&entry, &ctx.config.api);
    Ok(())
}

pub async fn add_link(ctx: &mut CliContext, args: LinkArgs) -> Result<(), CliError> {
    let mut form = LinkForm::new();
    args.apply(&mut form);
    let payload = forms::validate(&form).map_err(|e| CliError::from_field_errors(&e))?;

    let entry = ctx.store.create(payload).await?;
    println!(
        "{} {}: {} -> {}",
        "✓".bold().green(),
        t(ctx.language(), Msg::LinkCreated),
        ctx.config.api.short_url(&entry.short_code).cyan(),
        entry.url.blue().underline()
    );
    if let Some(until) = entry.active_until {
        println!(
            "{} Active until {}",
            "ℹ".bold().blue(),
            format_time(until).yellow()
        );
    }
    Ok(())
}

/// 先取回完整记录，再整条回写
pub async fn update_link(ctx: &mut CliContext, id: i64, args: LinkArgs) -> Result<(), CliError> {
    let current = ctx.store.fetch(id).await?;
    let mut form = LinkForm::for_entry(&current);
    args.apply(&mut form);
    let payload = forms::validate(&form).map_err(|e| CliError::from_field_errors(&e))?;

    let entry = ctx.store.update(id, payload).await?;
    println!(
        "{} {}: {} -> {}",
        "✓".bold().green(),
        t(ctx.language(), Msg::LinkUpdated),
        entry.short_code.cyan(),
        entry.url.blue().underline()
    );
    Ok(())
}

pub async fn remove_link(ctx: &mut CliContext, id: i64) -> Result<(), CliError> {
    ctx.store.delete(id).await?;
    println!(
        "{} {}: #{}",
        "✓".bold().green(),
        t(ctx.language(), Msg::LinkDeleted),
        id.to_string().cyan()
    );
    Ok(())
}

pub async fn transfer_link(
    ctx: &mut CliContext,
    id: i64,
    new_owner_id: i64,
) -> Result<(), CliError> {
    let updated = ctx.store.transfer(id, new_owner_id).await?;
    let code = updated
        .map(|e| e.short_code)
        .unwrap_or_else(|| format!("#{}", id));
    println!(
        "{} {}: {} -> user {}",
        "✓".bold().green(),
        t(ctx.language(), Msg::LinkTransferred),
        code.cyan(),
        new_owner_id.to_string().magenta()
    );
    Ok(())
}

pub async fn link_stats(ctx: &mut CliContext, id: i64) -> Result<(), CliError> {
    let stats = ctx.store.load_stats(id).await?;

    println!("{} #{}", "Statistics for link".bold().green(), stats.link_id);
    println!("  {:<14} {}", "Clicks".bold(), stats.access_count);
    println!(
        "  {:<14} {}",
        "Last access".bold(),
        stats
            .last_accessed_at
            .map(format_time)
            .unwrap_or_else(|| "never".to_string())
    );
    println!(
        "  {:<14} {}",
        "Security".bold(),
        security_label(stats.security_level)
    );

    if !stats.daily.is_empty() {
        println!();
        let peak = stats.daily.iter().map(|d| d.count).max().unwrap_or(1).max(1);
        for day in &stats.daily {
            let width = (day.count * 30).div_ceil(peak) as usize;
            println!(
                "  {} {:>6} {}",
                day.date.format("%Y-%m-%d").to_string().dimmed(),
                day.count,
                "█".repeat(width).cyan()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_args_keep_unset_fields() {
        let mut form = LinkForm {
            url: "https://old.example.com".into(),
            description: "keep me".into(),
            active_from: "2025-01-01".into(),
            ..LinkForm::default()
        };
        LinkArgs {
            url: Some("https://new.example.com".into()),
            enabled: Some(false),
            ..LinkArgs::default()
        }
        .apply(&mut form);

        assert_eq!(form.url, "https://new.example.com");
        assert_eq!(form.description, "keep me");
        assert_eq!(form.active_from, "2025-01-01");
        assert!(!form.enabled);
    }

    #[test]
    fn test_clear_window() {
        let mut form = LinkForm {
            active_from: "2025-01-01".into(),
            active_until: "2025-02-01".into(),
            ..LinkForm::default()
        };
        LinkArgs {
            clear_window: true,
            ..LinkArgs::default()
        }
        .apply(&mut form);
        assert!(form.active_from.is_empty());
        assert!(form.active_until.is_empty());
    }
}
