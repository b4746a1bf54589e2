//! Link CRUD operations

use tracing::debug;

use super::state::{App, CurrentScreen};
use crate::errors::LinkdeckError;
use crate::forms::FormController;
use crate::i18n::Msg;

impl App {
    fn report(&self, err: &LinkdeckError) {
        self.set_error(err.user_message());
    }

    /// 重新加载当前页
    pub async fn refresh_links(&mut self) {
        if let Err(e) = self.store.list().await {
            self.report(&e);
        }
        self.after_links_changed();
    }

    pub async fn next_page(&mut self) {
        let before = self.store.pagination().offset();
        match self.store.next_page().await {
            Ok(()) if self.store.pagination().offset() != before => self.reset_selection(),
            Ok(()) => {}
            Err(e) => self.report(&e),
        }
        self.after_links_changed();
    }

    pub async fn prev_page(&mut self) {
        let before = self.store.pagination().offset();
        match self.store.prev_page().await {
            Ok(()) if self.store.pagination().offset() != before => self.reset_selection(),
            Ok(()) => {}
            Err(e) => self.report(&e),
        }
        self.after_links_changed();
    }

    /// 调整每页条数并回到第一页
    pub async fn change_page_size(&mut self, delta: i64) {
        let current = self.store.pagination().page_size() as i64;
        let requested = (current + delta).max(1) as u64;
        let applied = self.store.set_page_size(requested);
        self.reset_selection();
        self.refresh_links().await;
        self.set_info(format!("Page size: {}", applied));
    }

    pub fn toggle_language(&mut self) {
        let next = self.language().next();
        match self.store.preferences_mut() {
            Some(prefs) => {
                if let Err(e) = prefs.set_language(next) {
                    self.report(&e);
                    return;
                }
            }
            None => {
                self.set_error("Preferences are not available");
                return;
            }
        }
        self.set_info(format!("Language: {}", next));
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// 列表变化后刷新过滤结果并修正选中项
    pub fn after_links_changed(&mut self) {
        if self.is_searching {
            self.filter_links_fuzzy();
        }
        self.clamp_selection();
    }

    pub fn open_add_form(&mut self) {
        self.form = Some(FormController::create(
            self.notifier.clone(),
            self.language(),
        ));
        self.current_screen = CurrentScreen::AddLink;
    }

    pub fn open_edit_form(&mut self) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let controller = FormController::edit(link, self.notifier.clone(), self.language());
        self.form = Some(controller);
        self.current_screen = CurrentScreen::EditLink;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.current_screen = CurrentScreen::Main;
    }

    /// 提交表单；成功后返回主界面，失败时停留在表单上
    pub async fn submit_form(&mut self) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        let result = form.submit(&mut self.store).await;
        match result {
            Ok(entry) => {
                debug!("Saved link {}", entry.short_code);
                self.close_form();
                self.after_links_changed();
                true
            }
            Err(_) => false,
        }
    }

    pub fn open_delete_confirm(&mut self) {
        if self.get_selected_link().is_some() {
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub async fn delete_selected_link(&mut self) {
        let Some(id) = self.get_selected_link().map(|l| l.id) else {
            self.current_screen = CurrentScreen::Main;
            return;
        };
        match self.store.delete(id).await {
            Ok(()) => self.set_status(self.msg(Msg::LinkDeleted)),
            Err(e) => self.report(&e),
        }
        self.current_screen = CurrentScreen::Main;
        self.after_links_changed();
    }

    /// 打开详情：重新获取链接并加载统计
    pub async fn open_details(&mut self) {
        let Some(id) = self.get_selected_link().map(|l| l.id) else {
            return;
        };
        self.current_screen = CurrentScreen::ViewDetails;
        if let Err(e) = self.store.fetch(id).await {
            self.report(&e);
            return;
        }
        if let Err(e) = self.store.load_stats(id).await {
            self.report(&e);
        }
    }

    pub fn open_transfer(&mut self) {
        if self.get_selected_link().is_some() {
            self.transfer_input.clear();
            self.transfer_error = None;
            self.current_screen = CurrentScreen::Transfer;
        }
    }

    pub async fn submit_transfer(&mut self) {
        let Some(id) = self.get_selected_link().map(|l| l.id) else {
            self.current_screen = CurrentScreen::Main;
            return;
        };
        let new_owner_id = match self.transfer_input.trim().parse::<i64>() {
            Ok(owner) if owner > 0 => owner,
            _ => {
                self.transfer_error = Some("Owner id must be a positive number".to_string());
                return;
            }
        };

        match self.store.transfer(id, new_owner_id).await {
            Ok(_) => {
                self.set_status(self.msg(Msg::LinkTransferred));
                self.current_screen = CurrentScreen::Main;
                self.after_links_changed();
            }
            Err(e) => {
                self.transfer_error = Some(e.user_message());
                self.report(&e);
            }
        }
    }

    /// 复制所选链接的短链接地址
    pub fn copy_short_url(&self) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let url = self.config.api.short_url(&link.short_code);

        #[cfg(feature = "clipboard")]
        {
            use crate::qr::{ClipboardSink, SystemClipboard};
            match SystemClipboard::new().and_then(|mut c| c.set_text(&url)) {
                Ok(()) => self.set_status(format!("Copied: {}", url)),
                Err(e) => self.report(&e),
            }
        }
        #[cfg(not(feature = "clipboard"))]
        self.set_info(url);
    }
}
