use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{AdminFocus, App, CurrentScreen};
use crate::notify::Severity;

/// Draw title bar with version, session and page statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let pagination = app.store.pagination();
    let mut spans = vec![
        Span::styled("linkdeck", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.session_label(), Style::default().fg(Color::Magenta)),
    ];
    if !app.auth.is_pending() && app.auth.user().is_some() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Total: {} ", app.store.total()),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(
                "Page {}/{} ({}/page)",
                pagination.current_page(),
                pagination.total_pages(app.store.total()),
                pagination.page_size()
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar; shows the visible toast if there is one
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = match app.notifier.current() {
        Some(toast) => {
            let (label, style) = match toast.severity {
                Severity::Error => ("ERROR", Style::default().fg(Color::White).bg(Color::Red)),
                Severity::Warning => ("WARN", Style::default().fg(Color::Black).bg(Color::Yellow)),
                Severity::Success => ("OK", Style::default().fg(Color::Black).bg(Color::Green)),
                Severity::Info => ("INFO", Style::default().fg(Color::Black).bg(Color::Cyan)),
            };
            (format!("[{}] {}", label, toast.text), style.bold())
        }
        None => ("Ready".to_string(), Style::default().fg(Color::Cyan)),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::AuthPending => vec![("...", "Checking session", Color::DarkGray)],
        CurrentScreen::AuthDenied => vec![
            ("r", "Retry", Color::Green),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Main if app.inline_search_mode => vec![
            ("Enter", "Keep filter", Color::Green),
            ("Esc", "Clear", Color::Red),
        ],
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("n/p", "Page", Color::Cyan),
            ("/", "Filter", Color::Cyan),
            ("v", "View", Color::Cyan),
            ("a", "Add", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("c", "QR", Color::Magenta),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::AddLink | CurrentScreen::EditLink => vec![
            ("Tab", "Next Field", Color::Cyan),
            ("Space", "Toggle", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::ViewDetails => vec![
            ("c", "QR", Color::Magenta),
            ("q/Esc", "Close", Color::Red),
        ],
        CurrentScreen::QrPreview => vec![
            ("s", "Save PNG", Color::Green),
            ("y", "Copy", Color::Green),
            ("+/-", "Size", Color::Cyan),
            ("e", "EC level", Color::Cyan),
            ("z", "Quiet zone", Color::Cyan),
            ("Esc", "Close", Color::Red),
        ],
        CurrentScreen::Transfer => vec![
            ("Enter", "Transfer", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::AdminSearch => match app.admin_focus {
            AdminFocus::Query => vec![
                ("Enter", "Search", Color::Green),
                ("Tab", "Results", Color::Cyan),
                ("Esc", "Close", Color::Red),
            ],
            AdminFocus::Results => vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("n/p", "Page", Color::Cyan),
                ("v", "View", Color::Cyan),
                ("x", "Disable", Color::Red),
                ("Tab", "Query", Color::Cyan),
                ("Esc", "Close", Color::Red),
            ],
        },
        CurrentScreen::Help => vec![("any key", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
