//! QR code preview popup

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::qr::QrController;

fn option_lines<'a>(app: &App, qr: &'a QrController) -> Vec<Line<'a>> {
    let options = qr.options();
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow).bold());
    let on_off = |b: bool| if b { "on" } else { "off" };

    let mut lines = vec![
        Line::from(vec![
            key("Target:      "),
            Span::styled(qr.target(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![key("Size:        "), Span::raw(format!("{} px", options.size_px))]),
        Line::from(vec![
            key("EC level:    "),
            Span::raw(options.error_correction.letter().to_string()),
        ]),
        Line::from(vec![key("Quiet zone:  "), Span::raw(on_off(options.quiet_zone))]),
        Line::from(vec![
            key("Caption:     "),
            Span::raw(options.caption.as_deref().unwrap_or("-")),
        ]),
    ];

    if let Some(rendered) = qr.rendered() {
        lines.push(Line::from(vec![
            key("Logo:        "),
            Span::raw(on_off(rendered.logo_applied())),
        ]));
        lines.push(Line::from(vec![
            key("Image:       "),
            Span::raw(format!("{}x{}", rendered.width(), rendered.height())),
        ]));
    }
    lines.push(Line::from(vec![
        key("Save to:     "),
        Span::styled(
            app.qr_output_path().display().to_string(),
            Style::default().fg(colors::MUTED),
        ),
    ]));

    if let Some(err) = qr.last_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(colors::ERROR).bold(),
        )));
    }
    lines
}

pub fn draw_qr_preview_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(qr) = app.qr.as_ref() else {
        return;
    };

    let inner_area = Popup::new(format!("QR Code: {}", app.qr_code), popup::QR_PREVIEW)
        .theme_color(Color::Magenta)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner_area);

    let preview = match qr.to_terminal_string() {
        Ok(text) => Paragraph::new(text)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .alignment(Alignment::Center),
        Err(e) => Paragraph::new(e.user_message())
            .style(Style::default().fg(colors::ERROR))
            .wrap(Wrap { trim: true }),
    };
    frame.render_widget(preview, chunks[0]);

    let side = Paragraph::new(option_lines(app, qr))
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(colors::MUTED)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(side, chunks[1]);
}
