//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - link_screens: Main, AddLink, EditLink, DeleteConfirm, ViewDetails, Transfer
//! - qr_screen: QrPreview
//! - admin_screen: AdminSearch
//! - misc_screens: AuthPending, AuthDenied, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod admin_screen;
mod link_screens;
mod misc_screens;
mod qr_screen;

use admin_screen::*;
use link_screens::*;
use misc_screens::*;
use qr_screen::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub async fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        handle_inline_search(app, key_code);
        return false;
    }

    match app.current_screen {
        CurrentScreen::AuthPending => false,
        CurrentScreen::AuthDenied => handle_auth_denied_screen(app, key_code).await,
        CurrentScreen::Main => handle_main_screen(app, key_code).await,
        CurrentScreen::AddLink | CurrentScreen::EditLink => {
            handle_link_form_screen(app, key_code).await
        }
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code).await,
        CurrentScreen::ViewDetails => handle_view_details_screen(app, key_code),
        CurrentScreen::Transfer => handle_transfer_screen(app, key_code).await,
        CurrentScreen::QrPreview => handle_qr_preview_screen(app, key_code),
        CurrentScreen::AdminSearch => handle_admin_search_screen(app, key_code).await,
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
