use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(link) = app.get_selected_link() else {
        return;
    };

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WARNING: Are you sure you want to delete this link?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(link.short_code.as_str(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::DarkGray)),
            Span::styled(link.url.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone!",
            Style::default().fg(Color::Red).bold(),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
