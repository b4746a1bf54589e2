//! Client-side link store
//!
//! Thin cache in front of [`LinkApi`]: every operation is one REST call, and a
//! successful call patches the cached page locally instead of refetching.
//! A failed call records a user-facing message in `last_error` and leaves
//! everything else untouched. There is no retry and no conflict handling; the
//! last write wins.

pub mod pagination;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{LinkApi, LinkEntry, LinkPayload, LinkStats, ResolvedLink};
use crate::config::PreferenceStore;
use crate::errors::Result;

pub use pagination::PaginationState;

pub struct LinkStore {
    api: Arc<dyn LinkApi>,
    preferences: Option<PreferenceStore>,

    links: Vec<LinkEntry>,
    total: u64,
    pagination: PaginationState,

    current: Option<LinkEntry>,
    stats: Option<LinkStats>,

    admin_query: String,
    admin_results: Vec<LinkEntry>,
    admin_total: u64,
    admin_pagination: PaginationState,

    last_error: Option<String>,
}

impl LinkStore {
    pub fn new(api: Arc<dyn LinkApi>, page_size: u64) -> Self {
        Self {
            api,
            preferences: None,
            links: Vec::new(),
            total: 0,
            pagination: PaginationState::new(page_size),
            current: None,
            stats: None,
            admin_query: String::new(),
            admin_results: Vec::new(),
            admin_total: 0,
            admin_pagination: PaginationState::new(page_size),
            last_error: None,
        }
    }

    /// 使用偏好文件中的每页条数，并在修改时写回
    pub fn with_preferences(api: Arc<dyn LinkApi>, preferences: PreferenceStore) -> Self {
        let mut store = Self::new(api, preferences.page_size());
        store.preferences = Some(preferences);
        store
    }

    pub fn api(&self) -> &Arc<dyn LinkApi> {
        &self.api
    }

    pub fn preferences(&self) -> Option<&PreferenceStore> {
        self.preferences.as_ref()
    }

    pub fn preferences_mut(&mut self) -> Option<&mut PreferenceStore> {
        self.preferences.as_mut()
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn current(&self) -> Option<&LinkEntry> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> Option<&LinkStats> {
        self.stats.as_ref()
    }

    pub fn admin_query(&self) -> &str {
        &self.admin_query
    }

    pub fn admin_results(&self) -> &[LinkEntry] {
        &self.admin_results
    }

    pub fn admin_total(&self) -> u64 {
        self.admin_total
    }

    pub fn admin_pagination(&self) -> &PaginationState {
        &self.admin_pagination
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn find(&self, id: i64) -> Option<&LinkEntry> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn find_by_code(&self, short_code: &str) -> Option<&LinkEntry> {
        self.links.iter().find(|l| l.short_code == short_code)
    }

    /// 记录调用结果：成功清空 last_error，失败写入面向用户的文案
    fn settle<T>(&mut self, op: &str, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(e) => {
                warn!("Link store {} failed: {}", op, e);
                self.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn replace_entry(&mut self, entry: &LinkEntry) {
        if let Some(slot) = self.links.iter_mut().find(|l| l.id == entry.id) {
            *slot = entry.clone();
        }
        if let Some(slot) = self.admin_results.iter_mut().find(|l| l.id == entry.id) {
            *slot = entry.clone();
        }
        if let Some(current) = self.current.as_mut()
            && current.id == entry.id
        {
            *current = entry.clone();
        }
    }

    // ============================================================
    // Links
    // ============================================================

    pub async fn create(&mut self, payload: LinkPayload) -> Result<LinkEntry> {
        let result = self.api.create_link(&payload).await;
        let entry = self.settle("create", result)?;

        self.links.insert(0, entry.clone());
        self.total += 1;
        debug!("Link created: {} -> {}", entry.short_code, entry.url);
        Ok(entry)
    }

    /// 重新加载当前页
    pub async fn list(&mut self) -> Result<()> {
        let page = self.pagination.current_page();
        self.load_page(page).await
    }

    /// 加载第 `page` 页（从 1 开始），成功后才移动 offset
    pub async fn load_page(&mut self, page: u64) -> Result<()> {
        let query = self.pagination.query_for_page(page);
        let result = self.api.list_links(query).await;
        let loaded = self.settle("list", result)?;

        self.links = loaded.items;
        self.total = loaded.total;
        self.pagination.set_offset(query.offset);
        debug!(
            "Loaded page {} ({} items, {} total)",
            self.pagination.current_page(),
            self.links.len(),
            self.total
        );
        Ok(())
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if self.pagination.has_next(self.total) {
            self.load_page(self.pagination.current_page().saturating_add(1)).await?;
        }
        Ok(())
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if self.pagination.has_prev() {
            self.load_page(self.pagination.current_page() - 1).await?;
        }
        Ok(())
    }

    /// 修改每页条数：offset 归零，并写入偏好文件
    ///
    /// 偏好文件写入失败只记录日志，内存中的分页照常生效。
    pub fn set_page_size(&mut self, size: u64) -> u64 {
        let size = self.pagination.set_page_size(size);
        self.admin_pagination.set_page_size(size);
        if let Some(prefs) = self.preferences.as_mut()
            && let Err(e) = prefs.set_page_size(size)
        {
            warn!("Failed to persist page size: {}", e);
        }
        size
    }

    pub async fn fetch(&mut self, id: i64) -> Result<LinkEntry> {
        let result = self.api.get_link(id).await;
        let entry = self.settle("fetch", result)?;

        self.replace_entry(&entry);
        self.current = Some(entry.clone());
        Ok(entry)
    }

    pub async fn update(&mut self, id: i64, payload: LinkPayload) -> Result<LinkEntry> {
        let result = self.api.update_link(id, &payload).await;
        let entry = self.settle("update", result)?;

        self.replace_entry(&entry);
        Ok(entry)
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        let result = self.api.delete_link(id).await;
        self.settle("delete", result)?;

        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        if self.links.len() < before {
            self.total = self.total.saturating_sub(1);
        }
        self.admin_results.retain(|l| l.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
            self.stats = None;
        }
        Ok(())
    }

    /// 转移所有权；服务端未返回记录时只在本地改写 owner_id
    pub async fn transfer(&mut self, id: i64, new_owner_id: i64) -> Result<Option<LinkEntry>> {
        let result = self.api.transfer_link(id, new_owner_id).await;
        let returned = self.settle("transfer", result)?;

        let updated = match returned {
            Some(entry) => Some(entry),
            None => self.find(id).cloned().map(|mut entry| {
                entry.owner_id = Some(new_owner_id);
                entry
            }),
        };
        if let Some(entry) = &updated {
            self.replace_entry(entry);
        }
        Ok(updated)
    }

    pub async fn load_stats(&mut self, id: i64) -> Result<LinkStats> {
        let result = self.api.link_stats(id).await;
        let stats = self.settle("stats", result)?;

        self.stats = Some(stats.clone());
        Ok(stats)
    }

    // ============================================================
    // Public lookups
    // ============================================================

    pub async fn resolve(&mut self, short_code: &str) -> Result<ResolvedLink> {
        let result = self.api.resolve_code(short_code).await;
        self.settle("resolve", result)
    }

    pub async fn redirect_target(&mut self, short_code: &str) -> Result<String> {
        let result = self.api.redirect_target(short_code).await;
        self.settle("redirect", result)
    }

    // ============================================================
    // Admin
    // ============================================================

    /// 管理员搜索，结果单独缓存
    pub async fn admin_search(&mut self, query: &str, page: u64) -> Result<()> {
        let page_query = self.admin_pagination.query_for_page(page);
        let result = self.api.admin_search(query, page_query).await;
        let loaded = self.settle("admin search", result)?;

        self.admin_query = query.to_string();
        self.admin_results = loaded.items;
        self.admin_total = loaded.total;
        self.admin_pagination.set_offset(page_query.offset);
        Ok(())
    }

    /// 禁用短码，本地所有同短码条目一并更新
    pub async fn admin_disable(&mut self, short_code: &str) -> Result<()> {
        let result = self.api.admin_disable(short_code).await;
        let returned = self.settle("admin disable", result)?;

        let patch = |entry: &mut LinkEntry| match &returned {
            Some(updated) => *entry = updated.clone(),
            None => entry.enabled = false,
        };
        self.links
            .iter_mut()
            .chain(self.admin_results.iter_mut())
            .chain(self.current.iter_mut())
            .filter(|l| l.short_code == short_code)
            .for_each(patch);
        Ok(())
    }

    pub async fn admin_view(&mut self, short_code: &str) -> Result<LinkEntry> {
        let result = self.api.admin_view(short_code).await;
        let entry = self.settle("admin view", result)?;

        self.current = Some(entry.clone());
        Ok(entry)
    }
}
