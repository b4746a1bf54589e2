//! Shared output helpers for link commands

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::api::{Availability, LinkEntry, SecurityLevel};
use crate::config::ApiConfig;

pub(crate) fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub(crate) fn availability_label(entry: &LinkEntry) -> ColoredString {
    match entry.availability() {
        Availability::Active => "active".green(),
        Availability::Scheduled => "scheduled".yellow(),
        Availability::Ended => "ended".dimmed(),
        Availability::Disabled => "disabled".red(),
    }
}

pub(crate) fn security_label(level: Option<SecurityLevel>) -> ColoredString {
    match level {
        Some(SecurityLevel::Safe) => "safe".green(),
        Some(SecurityLevel::Moderate) => "moderate".yellow(),
        Some(SecurityLevel::Risky) => "risky".red(),
        Some(SecurityLevel::Dangerous) => "dangerous".red().bold(),
        Some(SecurityLevel::Unknown) | None => "unknown".dimmed(),
    }
}

/// 列表中的单行
pub(crate) fn print_link_line(entry: &LinkEntry) {
    let mut parts = vec![
        format!("#{}", entry.id).dimmed().to_string(),
        format!(
            "{} -> {}",
            entry.short_code.cyan(),
            entry.url.blue().underline()
        ),
        format!("[{}]", availability_label(entry)),
    ];
    if entry.access_count > 0 {
        parts.push(
            format!("(clicks: {})", entry.access_count)
                .dimmed()
                .cyan()
                .to_string(),
        );
    }
    if let Some(until) = entry.active_until {
        parts.push(
            format!("(until: {})", format_time(until))
                .dimmed()
                .yellow()
                .to_string(),
        );
    }
    println!("  {}", parts.join(" "));
}

/// 详情视图
pub(crate) fn print_link_detail(entry: &LinkEntry, api: &ApiConfig) {
    let row = |label: &str, value: String| println!("  {:<14} {}", label.bold(), value);

    row("ID", entry.id.to_string());
    row("Short code", entry.short_code.cyan().to_string());
    row("Short URL", api.short_url(&entry.short_code).magenta().to_string());
    row("Target", entry.url.blue().underline().to_string());
    if let Some(desc) = &entry.description {
        row("Description", desc.clone());
    }
    row("Status", availability_label(entry).to_string());
    if let Some(from) = entry.active_from {
        row("Active from", format_time(from));
    }
    if let Some(until) = entry.active_until {
        row("Active until", format_time(until));
    }
    row("Clicks", entry.access_count.to_string());
    row("Security", security_label(entry.security_level).to_string());
    if let Some(owner) = entry.owner_id {
        row("Owner", owner.to_string());
    }
    row(
        "QR",
        format!(
            "logo: {}, subtitle: {}",
            if entry.qr.with_logo { "yes" } else { "no" },
            entry.qr.subtitle.as_deref().unwrap_or("-")
        ),
    );
    row("Created", format_time(entry.created_at));
    if let Some(updated) = entry.updated_at {
        row("Updated", format_time(updated));
    }
}
