//! Event handlers for link-related screens
//!
//! Handles: Main, AddLink, EditLink, DeleteConfirm, ViewDetails, Transfer

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_digit_input, handle_tab_navigation, handle_text_input,
};

/// Handle main screen input
pub async fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page().await,
        KeyCode::Left | KeyCode::Char('p') => app.prev_page().await,
        KeyCode::Char('+') => app.change_page_size(5).await,
        KeyCode::Char('-') => app.change_page_size(-5).await,
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh_links().await,
        KeyCode::Esc => {
            if app.is_searching {
                app.clear_search();
            } else {
                app.notifier.hide();
            }
        }
        KeyCode::Char('/') => app.start_inline_search(),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => app.open_details().await,
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_delete_confirm(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.open_transfer(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_qr_preview(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.open_admin_search(),
        KeyCode::Char('L') => app.toggle_language(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.copy_short_url(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle add/edit link form input
pub async fn handle_link_form_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => {
            app.submit_form().await;
        }
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => handle_tab_navigation(app, false),
        KeyCode::BackTab | KeyCode::Up => handle_tab_navigation(app, true),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}

/// Handle delete confirmation screen input
pub async fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.delete_selected_link().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}

/// Handle view details screen input
pub fn handle_view_details_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_qr_preview(),
        _ => {}
    }
    false
}

/// Handle transfer owner prompt input
pub async fn handle_transfer_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submit_transfer().await,
        KeyCode::Esc => app.current_screen = CurrentScreen::Main,
        KeyCode::Backspace => {
            app.transfer_input.pop();
            app.transfer_error = None;
        }
        KeyCode::Char(c) => {
            handle_digit_input(&mut app.transfer_input, c);
            app.transfer_error = None;
        }
        _ => {}
    }
    false
}

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            // 保留过滤结果
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.filter_links_fuzzy();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.filter_links_fuzzy();
        }
        _ => {}
    }
}
