//! Event handler for the admin search screen

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{AdminFocus, App};

pub async fn handle_admin_search_screen(app: &mut App, key_code: KeyCode) -> bool {
    match app.admin_focus {
        AdminFocus::Query => match key_code {
            KeyCode::Enter => app.run_admin_search().await,
            KeyCode::Esc => app.close_admin_search(),
            KeyCode::Tab | KeyCode::Down => app.admin_focus = AdminFocus::Results,
            KeyCode::Backspace => {
                app.admin_input.pop();
            }
            KeyCode::Char(c) => app.admin_input.push(c),
            _ => {}
        },
        AdminFocus::Results => match key_code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_admin_search(),
            KeyCode::Tab | KeyCode::Char('/') => app.admin_focus = AdminFocus::Query,
            KeyCode::Up | KeyCode::Char('k') => app.admin_move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.admin_move_down(),
            KeyCode::Right | KeyCode::Char('n') => app.admin_next_page().await,
            KeyCode::Left | KeyCode::Char('p') => app.admin_prev_page().await,
            KeyCode::Char('x') | KeyCode::Char('X') => app.admin_disable_selected().await,
            KeyCode::Enter | KeyCode::Char('v') => app.admin_view_selected().await,
            _ => {}
        },
    }
    false
}
