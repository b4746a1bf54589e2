//! App state definition and basic state management

use std::sync::Arc;

use crate::api::{LinkApi, LinkEntry};
use crate::auth::AuthGate;
use crate::config::{PreferenceStore, Preferences, StaticConfig};
use crate::forms::FormController;
use crate::i18n::{Language, Msg, t};
use crate::notify::ToastNotifier;
use crate::qr::QrController;
use crate::store::LinkStore;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    /// 会话检查中，受保护页面不渲染
    AuthPending,
    /// 未登录或会话无效
    AuthDenied,
    Main,
    AddLink,
    EditLink,
    DeleteConfirm,
    ViewDetails,
    QrPreview,
    Transfer,
    AdminSearch,
    Help,
    Exiting,
}

/// 管理员搜索页的焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFocus {
    Query,
    Results,
}

pub struct App {
    pub config: Arc<StaticConfig>,
    pub store: LinkStore,
    pub auth: AuthGate,
    pub notifier: ToastNotifier,
    pub current_screen: CurrentScreen,

    // 表单
    pub form: Option<FormController>,

    // QR 预览
    pub qr: Option<QrController>,
    pub qr_code: String,

    // 转移所有权
    pub transfer_input: String,
    pub transfer_error: Option<String>,

    // 管理员搜索
    pub admin_input: String,
    pub admin_focus: AdminFocus,
    pub admin_selected: usize,

    // 行内模糊过滤（只作用于已加载的当前页）
    pub inline_search_mode: bool,
    pub is_searching: bool,
    pub search_input: String,
    pub filtered_indices: Vec<usize>,

    // 列表选择与虚拟滚动
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
}

impl App {
    pub fn new(config: Arc<StaticConfig>, api: Arc<dyn LinkApi>, notifier: ToastNotifier) -> Self {
        let defaults = Preferences {
            page_size: config.ui.default_page_size,
            language: config.ui.language,
        };
        let prefs = PreferenceStore::load(&config.storage.preferences_file, defaults);
        Self::with_store(config, LinkStore::with_preferences(api, prefs), notifier)
    }

    pub fn with_store(
        config: Arc<StaticConfig>,
        store: LinkStore,
        notifier: ToastNotifier,
    ) -> Self {
        Self {
            config,
            store,
            auth: AuthGate::new(),
            notifier,
            current_screen: CurrentScreen::AuthPending,
            form: None,
            qr: None,
            qr_code: String::new(),
            transfer_input: String::new(),
            transfer_error: None,
            admin_input: String::new(),
            admin_focus: AdminFocus::Query,
            admin_selected: 0,
            inline_search_mode: false,
            is_searching: false,
            search_input: String::new(),
            filtered_indices: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 20,
        }
    }

    pub fn language(&self) -> Language {
        self.store
            .preferences()
            .map(|p| p.language())
            .unwrap_or(self.config.ui.language)
    }

    pub fn msg(&self, msg: Msg) -> &'static str {
        t(self.language(), msg)
    }

    pub fn set_status(&self, message: impl Into<String>) {
        self.notifier.success(message);
    }

    pub fn set_info(&self, message: impl Into<String>) {
        self.notifier.info(message);
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.notifier.error(message);
    }

    /// 当前列表中显示的条数（考虑行内过滤）
    pub fn display_count(&self) -> usize {
        if self.is_searching {
            self.filtered_indices.len()
        } else {
            self.store.links().len()
        }
    }

    /// 按显示顺序取第 n 条
    pub fn display_link(&self, index: usize) -> Option<&LinkEntry> {
        let links = self.store.links();
        if self.is_searching {
            self.filtered_indices.get(index).and_then(|i| links.get(*i))
        } else {
            links.get(index)
        }
    }

    pub fn display_links(&self) -> Vec<&LinkEntry> {
        (0..self.display_count())
            .filter_map(|i| self.display_link(i))
            .collect()
    }

    pub fn get_selected_link(&self) -> Option<&LinkEntry> {
        self.display_link(self.selected_index)
    }

    pub fn selected_admin_link(&self) -> Option<&LinkEntry> {
        self.store.admin_results().get(self.admin_selected)
    }

    pub fn clear_search(&mut self) {
        self.inline_search_mode = false;
        self.is_searching = false;
        self.search_input.clear();
        self.filtered_indices.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}
