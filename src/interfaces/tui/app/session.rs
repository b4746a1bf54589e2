//! Session gate for the TUI

use tracing::info;

use super::state::{App, CurrentScreen};
use crate::auth::AuthState;
use crate::i18n::Msg;

impl App {
    /// 检查会话；通过后进入主界面并加载第一页
    pub async fn check_session(&mut self) {
        self.current_screen = CurrentScreen::AuthPending;
        let api = self.store.api().clone();
        let state = self.auth.check(api.as_ref()).await.clone();

        match state {
            AuthState::Authenticated(user) => {
                info!("TUI session for {}", user.username);
                self.current_screen = CurrentScreen::Main;
                self.refresh_links().await;
            }
            AuthState::Denied(reason) => {
                self.current_screen = CurrentScreen::AuthDenied;
                self.set_error(reason);
            }
            AuthState::Checking => {}
        }
    }

    /// 当前会话的提示文本
    pub fn session_label(&self) -> String {
        match self.auth.state() {
            AuthState::Checking => self.msg(Msg::SessionChecking).to_string(),
            AuthState::Authenticated(user) if user.is_admin => format!("{} (admin)", user.username),
            AuthState::Authenticated(user) => user.username.clone(),
            AuthState::Denied(_) => self.msg(Msg::SessionDenied).to_string(),
        }
    }

    pub fn denied_reason(&self) -> Option<&str> {
        match self.auth.state() {
            AuthState::Denied(reason) => Some(reason),
            _ => None,
        }
    }
}
