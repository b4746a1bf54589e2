use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::i18n::Msg;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_auth_screen(frame: &mut Frame, app: &App, area: Rect) {
    let (title, color, body) = match app.denied_reason() {
        None => (
            "Session",
            colors::PRIMARY,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    app.msg(Msg::SessionChecking),
                    Style::default().fg(Color::Cyan).bold(),
                )),
            ],
        ),
        Some(reason) => (
            "Access Denied",
            colors::ERROR,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    app.msg(Msg::SessionDenied),
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(""),
                Line::from(Span::styled(reason, Style::default().fg(Color::White))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[r]", Style::default().fg(Color::Green).bold()),
                    Span::raw(" retry, "),
                    Span::styled("[q]", Style::default().fg(Color::Magenta).bold()),
                    Span::raw(" quit"),
                ]),
            ],
        ),
    };

    let inner_area = Popup::new(title, popup::AUTH)
        .theme_color(color)
        .render(frame, area);
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}
