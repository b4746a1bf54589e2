//! Add / edit link form

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::forms::{FormField, FormMode, LinkForm, MAX_DESCRIPTION_CHARS, MAX_SUBTITLE_CHARS};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

fn placeholder(field: FormField) -> Option<&'static str> {
    match field {
        FormField::Description | FormField::Subtitle => Some("optional"),
        FormField::ActiveFrom | FormField::ActiveUntil => {
            Some("e.g. 2025-12-31, 2025-12-31 09:00 or 7d")
        }
        _ => None,
    }
}

fn draw_text_field(frame: &mut Frame, form: &LinkForm, field: FormField, area: Rect) {
    let value = form.text(field).unwrap_or("");
    let mut input = InputField::new(field.title(), value)
        .active(form.focus == field)
        .error(form.error(field));
    if field == FormField::Url {
        input = input.required();
    }
    if let Some(hint) = placeholder(field) {
        input = input.placeholder(hint);
    }
    match field {
        FormField::Description => input = input.max_chars(MAX_DESCRIPTION_CHARS),
        FormField::Subtitle => input = input.max_chars(MAX_SUBTITLE_CHARS),
        _ => {}
    }
    input.render(frame, area);
}

fn draw_toggle(frame: &mut Frame, form: &LinkForm, field: FormField, area: Rect) {
    let checked = form.flag(field).unwrap_or(false);
    let mark = if checked { "[x]" } else { "[ ]" };
    let focused = form.focus == field;
    let label_style = if focused {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Green).bold()),
        Span::styled(format!(" {}", field.title()), label_style),
        Span::styled(
            if focused { "  (Space to toggle)" } else { "" },
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn draw_link_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(controller) = app.form.as_ref() else {
        return;
    };
    let form = &controller.form;

    let (title, color) = match form.mode {
        FormMode::Create => ("Add New Short Link".to_string(), Color::Green),
        FormMode::Edit { id } => (format!("Edit Link #{}", id), Color::Yellow),
    };
    let inner_area = Popup::new(title, popup::LINK_FORM)
        .theme_color(color)
        .render(frame, area);

    let constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|f| {
            if f.is_toggle() {
                Constraint::Length(1)
            } else {
                Constraint::Length(4)
            }
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
        if field.is_toggle() {
            draw_toggle(frame, form, *field, *chunk);
        } else {
            draw_text_field(frame, form, *field, *chunk);
        }
    }
}
