//! Detail panel component for displaying selected link information

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::ui::widgets::StatusIndicator;

fn field<'a>(label: &'a str, value: impl Into<String>, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.into(), style),
    ])
}

fn format_time(dt: Option<chrono::DateTime<chrono::Utc>>, none: &str) -> String {
    dt.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| none.to_string())
}

/// Draw the detail panel showing information about the selected link
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(link) = app.get_selected_link() else {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No link selected",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(empty_text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let indicator = StatusIndicator::new(link);
    let short_url = app.config.api.short_url(&link.short_code);
    let white = Style::default().fg(Color::White);

    let mut details = vec![
        Line::from(""),
        field(
            "Code:",
            link.short_code.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        field("Short URL:", short_url, Style::default().fg(Color::Cyan)),
        Line::from(""),
        Line::from(Span::styled("URL:", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(link.url.clone(), Style::default().fg(Color::Blue))),
        Line::from(""),
    ];
    if let Some(desc) = link.description.as_deref().filter(|d| !d.is_empty()) {
        details.push(field("About:", desc, white));
    }
    details.extend([
        field(
            "Clicks:",
            link.access_count.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        field("Status:", indicator.text(), indicator.style().bold()),
        field("From:", format_time(link.active_from, "-"), white),
        field("Until:", format_time(link.active_until, "-"), white),
        field("Created:", format_time(Some(link.created_at), "-"), white),
    ]);
    if let Some(owner) = link.owner_id {
        details.push(field("Owner:", owner.to_string(), white));
    }
    if let Some(level) = link.security_level {
        details.push(field("Security:", level.to_string(), Style::default().fg(Color::Yellow)));
    }

    details.extend([
        Line::from(""),
        Line::from(Span::styled("Actions:", Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("Copy short URL", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" c ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("QR code", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" t ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("Transfer", Style::default().fg(Color::DarkGray)),
        ]),
    ]);

    let paragraph = Paragraph::new(details)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
