//! Admin search screen actions

use tracing::warn;

use super::state::{AdminFocus, App, CurrentScreen};
use crate::i18n::Msg;

impl App {
    /// 非管理员不能进入
    pub fn open_admin_search(&mut self) {
        if let Err(e) = self.auth.require_admin() {
            warn!("Admin screen refused: {}", e);
            self.set_error(self.msg(Msg::AdminOnly));
            return;
        }
        self.admin_input = self.store.admin_query().to_string();
        self.admin_focus = AdminFocus::Query;
        self.current_screen = CurrentScreen::AdminSearch;
    }

    pub fn close_admin_search(&mut self) {
        self.current_screen = CurrentScreen::Main;
    }

    pub async fn run_admin_search(&mut self) {
        let query = self.admin_input.trim().to_string();
        self.run_admin_search_page(&query, 1).await;
    }

    async fn run_admin_search_page(&mut self, query: &str, page: u64) {
        match self.store.admin_search(query, page).await {
            Ok(()) => {
                self.admin_selected = 0;
                self.admin_focus = AdminFocus::Results;
            }
            Err(e) => self.set_error(e.user_message()),
        }
    }

    pub async fn admin_next_page(&mut self) {
        let pagination = self.store.admin_pagination();
        if pagination.has_next(self.store.admin_total()) {
            let page = pagination.current_page() + 1;
            let query = self.store.admin_query().to_string();
            self.run_admin_search_page(&query, page).await;
        }
    }

    pub async fn admin_prev_page(&mut self) {
        let pagination = self.store.admin_pagination();
        if pagination.has_prev() {
            let page = pagination.current_page() - 1;
            let query = self.store.admin_query().to_string();
            self.run_admin_search_page(&query, page).await;
        }
    }

    pub async fn admin_disable_selected(&mut self) {
        let Some(code) = self.selected_admin_link().map(|l| l.short_code.clone()) else {
            return;
        };
        match self.store.admin_disable(&code).await {
            Ok(()) => self.set_status(format!("{}: {}", self.msg(Msg::LinkDisabled), code)),
            Err(e) => self.set_error(e.user_message()),
        }
    }

    /// 查看任意链接，结果进入详情页
    pub async fn admin_view_selected(&mut self) {
        let Some(code) = self.selected_admin_link().map(|l| l.short_code.clone()) else {
            return;
        };
        match self.store.admin_view(&code).await {
            Ok(_) => self.current_screen = CurrentScreen::ViewDetails,
            Err(e) => self.set_error(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::interfaces::tui::app::test_support::{MemoryApi, app_with_api, app_with_links, entry};
    use crate::interfaces::tui::app::{AdminFocus, CurrentScreen};

    #[tokio::test]
    async fn test_non_admin_is_refused() {
        let mut app = app_with_links(vec![entry(1, "a")]).await;
        app.open_admin_search();
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(
            app.notifier.current().unwrap().text,
            "Admin permission required"
        );
    }

    #[tokio::test]
    async fn test_admin_search_and_disable() {
        let mut api = MemoryApi::new(vec![entry(1, "promo"), entry(2, "docs")]);
        api.admin = true;
        let mut app = app_with_api(Arc::new(api));
        app.check_session().await;

        app.open_admin_search();
        assert_eq!(app.current_screen, CurrentScreen::AdminSearch);

        app.admin_input = "promo".into();
        app.run_admin_search().await;
        assert_eq!(app.admin_focus, AdminFocus::Results);
        assert_eq!(app.store.admin_results().len(), 1);

        app.admin_disable_selected().await;
        assert!(!app.store.admin_results()[0].enabled);
        assert!(!app.store.find_by_code("promo").unwrap().enabled);

        app.admin_view_selected().await;
        assert_eq!(app.current_screen, CurrentScreen::ViewDetails);
        assert_eq!(app.store.current().unwrap().short_code, "promo");
    }
}
