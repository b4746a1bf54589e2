use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;
use crate::interfaces::tui::ui::widgets::StatusIndicator;
use crate::utils::truncate_chars;

fn header_cell(name: &'static str) -> Span<'static> {
    Span::styled(
        name,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_empty(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, text: &'static str, color: Color| {
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(text, Style::default().fg(Color::DarkGray)),
        ])
    };

    let (headline, title, action) = if app.is_searching {
        (
            "No links on this page match the filter",
            format!("Filter (\"{}\")", app.search_input),
            hint("[Esc]", " to clear the filter", Color::Yellow),
        )
    } else if let Some(err) = app.store.last_error() {
        (
            "Could not load links",
            format!("Short Links ({})", err),
            hint("[r]", " to retry", Color::Yellow),
        )
    } else {
        (
            "No short links found",
            "Short Links".to_string(),
            hint("[a]", " to create your first link", Color::Green),
        )
    };

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        action,
    ];

    let empty = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(empty, area);
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let total_on_page = app.display_count();
    if total_on_page == 0 {
        draw_empty(frame, app, area);
        return;
    }

    // 计算可见窗口（border 2行 + header 1行 + header margin 1行 = 4行开销）
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);

    let offset = app.scroll_offset.min(total_on_page.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total_on_page);

    let header = Row::new(vec![
        header_cell("ID"),
        header_cell("Code"),
        header_cell("URL"),
        header_cell("Clicks"),
        header_cell("Status"),
    ])
    .bottom_margin(1);

    // 虚拟渲染：只构建可见行的 Row
    let rows: Vec<Row> = (offset..end)
        .filter_map(|i| app.display_link(i))
        .map(|link| {
            let indicator = StatusIndicator::new(link);
            Row::new(vec![
                Span::styled(link.id.to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    link.short_code.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate_chars(&link.url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    link.access_count.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(indicator.text(), indicator.style()),
            ])
        })
        .collect();

    let mut title_parts = vec![];
    if app.is_searching {
        title_parts.push(format!(
            "Filter: \"{}\" ({} on this page)",
            app.search_input, total_on_page
        ));
    } else {
        title_parts.push(format!("Short Links ({})", app.store.total()));
    }
    let pagination = app.store.pagination();
    let total_pages = pagination.total_pages(app.store.total());
    if total_pages > 1 {
        title_parts.push(format!(
            "Page {}/{}",
            pagination.current_page(),
            total_pages
        ));
    }
    let title = title_parts.join(" | ");

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),  // ID
            Constraint::Length(14), // Code
            Constraint::Min(20),    // URL
            Constraint::Length(8),  // Clicks
            Constraint::Length(10), // Status
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
