use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Navigate list"),
            ("Home, g", "Jump to top"),
            ("End, G", "Jump to bottom"),
            ("PageUp/PageDown", "Scroll 10 items"),
            ("n/p, Right/Left", "Next / previous page"),
            ("+/-", "Change page size"),
        ],
    ),
    (
        "LINKS",
        &[
            ("a", "Add new link"),
            ("e", "Edit selected link"),
            ("d", "Delete selected link"),
            ("v, Enter", "View details and statistics"),
            ("t", "Transfer ownership"),
            ("y", "Copy short URL"),
            ("r", "Reload current page"),
        ],
    ),
    (
        "QR CODE",
        &[
            ("c", "Open QR preview"),
            ("s / y", "Save PNG / copy to clipboard"),
            ("+/-, e, z", "Size, EC level, quiet zone"),
        ],
    ),
    (
        "OTHER",
        &[
            ("/", "Filter current page"),
            ("m", "Admin search (admins only)"),
            ("L", "Switch language"),
            ("Esc", "Clear filter / dismiss message"),
            ("?, h", "Show this help"),
            ("q", "Quit"),
        ],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner_area);
}
