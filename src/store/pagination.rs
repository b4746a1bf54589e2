//! 分页状态（limit / offset）

use crate::api::PageQuery;
use crate::config::preferences::clamp_page_size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: u64,
    offset: u64,
}

impl PaginationState {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: clamp_page_size(page_size),
            offset: 0,
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// 当前页码，从 1 开始
    pub fn current_page(&self) -> u64 {
        (self.offset / self.page_size).saturating_add(1)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.offset.saturating_add(self.page_size) < total
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    /// 第 `page` 页的 offset，页码小于 1 按 1 处理，超出范围时取 `u64::MAX`
    pub fn offset_for_page(&self, page: u64) -> u64 {
        (page.max(1) - 1).saturating_mul(self.page_size)
    }

    pub fn query(&self) -> PageQuery {
        self.query_for_page(self.current_page())
    }

    pub fn query_for_page(&self, page: u64) -> PageQuery {
        PageQuery {
            limit: self.page_size,
            offset: self.offset_for_page(page),
        }
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// 修改每页条数，offset 归零
    pub fn set_page_size(&mut self, size: u64) -> u64 {
        self.page_size = clamp_page_size(size);
        self.offset = 0;
        self.page_size
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(20)
    }
}
