//! Event handlers for session, help and exit screens

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// 会话被拒绝：r 重新检查，q 退出
pub async fn handle_auth_denied_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.auth.reset();
            app.check_session().await;
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Any key closes help
pub fn handle_help_screen(app: &mut App, _key_code: KeyCode) -> bool {
    app.current_screen = CurrentScreen::Main;
    false
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}
