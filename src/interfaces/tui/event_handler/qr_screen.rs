//! Event handler for the QR preview

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// s 保存 PNG，y 复制图片，+/- 调整尺寸，e 切换纠错等级，z 切换静区
pub fn handle_qr_preview_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.close_qr_preview(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.save_qr(),
        #[cfg(feature = "clipboard")]
        KeyCode::Char('y') | KeyCode::Char('Y') => app.copy_qr(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.qr_grow(),
        KeyCode::Char('-') => app.qr_shrink(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.qr_cycle_error_correction(),
        KeyCode::Char('z') | KeyCode::Char('Z') => app.qr_toggle_quiet_zone(),
        _ => {}
    }
    false
}
