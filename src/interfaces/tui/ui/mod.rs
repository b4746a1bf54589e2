// UI submodules
mod admin_search;
mod auth;
mod common;
mod delete_confirm;
mod detail_panel;
mod exiting;
mod help;
mod inline_search;
mod link_form;
mod main_screen;
mod qr_preview;
mod transfer;
mod view_details;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use admin_search::draw_admin_search_screen;
pub use auth::draw_auth_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use detail_panel::draw_detail_panel;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use link_form::draw_link_form_screen;
pub use main_screen::draw_main_screen;
pub use qr_preview::draw_qr_preview_screen;
pub use transfer::draw_transfer_screen;
pub use view_details::draw_view_details_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = if app.inline_search_mode {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Inline search bar
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    };

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        // 会话检查完成前不渲染任何受保护内容
        CurrentScreen::AuthPending | CurrentScreen::AuthDenied => {
            draw_auth_screen(frame, app, main_chunks[1])
        }
        CurrentScreen::Main => draw_main_with_panel(frame, app, main_chunks[1]),
        screen => {
            // 弹窗叠加在主界面之上
            draw_main_with_panel(frame, app, main_chunks[1]);
            draw_overlay(frame, app, screen, main_chunks[1]);
        }
    }

    if app.inline_search_mode {
        draw_inline_search_bar(frame, app, main_chunks[2]);
        draw_status_bar(frame, app, main_chunks[3]);
        draw_footer(frame, app, main_chunks[4]);
    } else {
        draw_status_bar(frame, app, main_chunks[2]);
        draw_footer(frame, app, main_chunks[3]);
    }
}

fn draw_main_with_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left: link list
            Constraint::Percentage(40), // Right: detail panel
        ])
        .split(area);

    draw_main_screen(frame, app, content_chunks[0]);
    draw_detail_panel(frame, app, content_chunks[1]);
}

fn draw_overlay(frame: &mut Frame, app: &App, screen: CurrentScreen, area: Rect) {
    match screen {
        CurrentScreen::AddLink | CurrentScreen::EditLink => {
            draw_link_form_screen(frame, app, area)
        }
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, area),
        CurrentScreen::ViewDetails => draw_view_details_screen(frame, app, area),
        CurrentScreen::QrPreview => draw_qr_preview_screen(frame, app, area),
        CurrentScreen::Transfer => draw_transfer_screen(frame, app, area),
        CurrentScreen::AdminSearch => draw_admin_search_screen(frame, app, area),
        CurrentScreen::Help => draw_help_screen(frame, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, area),
        CurrentScreen::Main | CurrentScreen::AuthPending | CurrentScreen::AuthDenied => {}
    }
}
