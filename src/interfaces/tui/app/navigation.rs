//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let display_len = self.display_count();
        if self.selected_index < display_len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let display_len = self.display_count();
        if display_len > 0 {
            self.selected_index = display_len - 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.adjust_scroll_offset();
    }

    /// 选中项超出列表时收回到末尾
    pub fn clamp_selection(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
        self.adjust_scroll_offset();
    }

    /// 保证选中项在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let height = self.last_visible_height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
    }

    pub fn admin_move_up(&mut self) {
        self.admin_selected = self.admin_selected.saturating_sub(1);
    }

    pub fn admin_move_down(&mut self) {
        let max_index = self.store.admin_results().len().saturating_sub(1);
        if self.admin_selected < max_index {
            self.admin_selected += 1;
        }
    }
}
