//! Input handling utilities
//!
//! Provides unified input handling for the link form fields

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if let Some(controller) = app.form.as_mut() {
        if controller.form.focus.is_toggle() {
            if c == ' ' {
                controller.form.toggle();
            }
        } else {
            controller.form.push_char(c);
        }
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if let Some(controller) = app.form.as_mut() {
        controller.form.pop_char();
    }
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App, backwards: bool) {
    if let Some(controller) = app.form.as_mut() {
        if backwards {
            controller.form.focus_prev();
        } else {
            controller.form.focus_next();
        }
    }
}

/// Single-line numeric prompt (transfer owner id)
pub fn handle_digit_input(buffer: &mut String, c: char) {
    if c.is_ascii_digit() && buffer.len() < 19 {
        buffer.push(c);
    }
}
