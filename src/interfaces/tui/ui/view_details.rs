use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::widgets::{Popup, StatusIndicator};
use crate::api::{Availability, LinkEntry, LinkStats};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{STATS_MAX_DAYS, popup};
use crate::utils::time_parser::TimeParser;

fn label(text: &str) -> Span<'_> {
    Span::styled(format!("{:<14}", text), Style::default().fg(Color::Yellow).bold())
}

fn window_info(link: &LinkEntry) -> (String, Style) {
    let now = Utc::now();
    match link.availability_at(now) {
        Availability::Disabled => ("Disabled".to_string(), Style::default().fg(Color::DarkGray)),
        Availability::Scheduled => match link.active_from {
            Some(from) => (
                format!("Starts in {}", TimeParser::format_remaining(now, from)),
                Style::default().fg(Color::Yellow),
            ),
            None => ("Scheduled".to_string(), Style::default().fg(Color::Yellow)),
        },
        Availability::Ended => ("Ended".to_string(), Style::default().fg(Color::Red).bold()),
        Availability::Active => match link.active_until {
            Some(until) => (
                format!("{} remaining", TimeParser::format_remaining(now, until)),
                Style::default().fg(Color::Green),
            ),
            None => ("No end date".to_string(), Style::default().fg(Color::Cyan)),
        },
    }
}

fn link_lines<'a>(app: &App, link: &'a LinkEntry) -> Vec<Line<'a>> {
    let indicator = StatusIndicator::new(link);
    let (window, window_style) = window_info(link);
    let fmt = |dt: Option<chrono::DateTime<Utc>>| {
        dt.map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut lines = vec![
        Line::from(vec![
            label("Short Code:"),
            Span::styled(link.short_code.as_str(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            label("Short URL:"),
            Span::styled(
                app.config.api.short_url(&link.short_code),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            label("Target URL:"),
            Span::styled(link.url.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            label("Description:"),
            Span::raw(link.description.as_deref().unwrap_or("-")),
        ]),
        Line::from(vec![
            label("Status:"),
            Span::styled(indicator.text(), indicator.style().bold()),
            Span::raw("  "),
            Span::styled(window, window_style),
        ]),
        Line::from(vec![label("Active From:"), Span::raw(fmt(link.active_from))]),
        Line::from(vec![label("Active Until:"), Span::raw(fmt(link.active_until))]),
        Line::from(vec![label("Created:"), Span::raw(fmt(Some(link.created_at)))]),
        Line::from(vec![label("Updated:"), Span::raw(fmt(link.updated_at))]),
        Line::from(vec![
            label("QR:"),
            Span::raw(format!(
                "logo {}, subtitle {}",
                if link.qr.with_logo { "on" } else { "off" },
                link.qr.subtitle.as_deref().unwrap_or("-")
            )),
        ]),
    ];
    if let Some(owner) = link.owner_id {
        lines.push(Line::from(vec![label("Owner:"), Span::raw(owner.to_string())]));
    }
    lines
}

fn stats_lines(stats: Option<&LinkStats>) -> Vec<Line<'static>> {
    let Some(stats) = stats else {
        return vec![Line::from(Span::styled(
            "No statistics loaded",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total clicks:  ", Style::default().fg(Color::Yellow).bold()),
            Span::styled(stats.access_count.to_string(), Style::default().fg(Color::Green).bold()),
        ]),
        Line::from(vec![
            Span::styled("Last access:   ", Style::default().fg(Color::Yellow).bold()),
            Span::raw(
                stats
                    .last_accessed_at
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string()),
            ),
        ]),
    ];
    if let Some(level) = stats.security_level {
        lines.push(Line::from(vec![
            Span::styled("Security:      ", Style::default().fg(Color::Yellow).bold()),
            Span::raw(level.to_string()),
        ]));
    }

    // 只显示最近的几天
    let start = stats.daily.len().saturating_sub(STATS_MAX_DAYS);
    let days = &stats.daily[start..];
    let max = days.iter().map(|d| d.count).max().unwrap_or(0).max(1);
    if !days.is_empty() {
        lines.push(Line::from(""));
    }
    for day in days {
        let width = (day.count * 30).div_ceil(max) as usize;
        lines.push(Line::from(vec![
            Span::styled(
                day.date.format("%m-%d ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", day.count)),
        ]));
    }
    lines
}

pub fn draw_view_details_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(link) = app.store.current() else {
        let inner = Popup::new("Link Details", popup::VIEW_DETAILS).render(frame, area);
        let text = app.store.last_error().unwrap_or("Loading...");
        frame.render_widget(Paragraph::new(text), inner);
        return;
    };

    let inner_area = Popup::new(format!("Link Details: {}", link.short_code), popup::VIEW_DETAILS)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(4)])
        .split(inner_area);

    frame.render_widget(
        Paragraph::new(link_lines(app, link)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let stats = app.store.stats().filter(|s| s.link_id == link.id);
    let stats_block = Block::default()
        .title("Access Statistics")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(stats_lines(stats)).block(stats_block), chunks[1]);
}
