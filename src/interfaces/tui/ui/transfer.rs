use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_transfer_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(link) = app.get_selected_link() else {
        return;
    };

    let inner_area = Popup::new("Transfer Ownership", popup::TRANSFER)
        .theme_color(Color::Yellow)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
        .split(inner_area);

    let owner = link
        .owner_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let header = vec![
        Line::from(vec![
            Span::styled("Link:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(link.short_code.as_str(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("Owner: ", Style::default().fg(Color::DarkGray)),
            Span::raw(owner),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    InputField::new("New owner id", &app.transfer_input)
        .active(true)
        .required()
        .error(app.transfer_error.as_deref())
        .render(frame, chunks[1]);
}
