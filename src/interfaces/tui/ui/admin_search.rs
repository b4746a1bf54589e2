//! Admin search popup: query box on top, results table below

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use super::widgets::{InputField, Popup, StatusIndicator};
use crate::interfaces::tui::app::{AdminFocus, App};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, popup};
use crate::utils::truncate_chars;

pub fn draw_admin_search_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Admin Search", popup::ADMIN_SEARCH)
        .theme_color(Color::Red)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(inner_area);

    InputField::new("Query (code, URL or description)", &app.admin_input)
        .active(app.admin_focus == AdminFocus::Query)
        .render(frame, chunks[0]);

    let results = app.store.admin_results();
    let pagination = app.store.admin_pagination();
    let total = app.store.admin_total();
    let title = format!(
        "Results ({}) | Page {}/{}",
        total,
        pagination.current_page(),
        pagination.total_pages(total)
    );
    let border_color = if app.admin_focus == AdminFocus::Results {
        colors::PRIMARY
    } else {
        colors::MUTED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title);

    if results.is_empty() {
        let text = if app.store.admin_query().is_empty() {
            "Type a query and press Enter"
        } else {
            "No links match"
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(colors::MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let rows: Vec<Row> = results
        .iter()
        .map(|link| {
            let indicator = StatusIndicator::new(link);
            Row::new(vec![
                Span::styled(link.short_code.clone(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    truncate_chars(&link.url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw(
                    link.owner_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Span::styled(indicator.text(), indicator.style()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Code", "URL", "Owner", "Status"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if app.admin_focus == AdminFocus::Results {
        state.select(Some(app.admin_selected.min(results.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[1], &mut state);
}
