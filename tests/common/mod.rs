//! Shared fixtures for integration tests
//!
//! `FakeApi` keeps links in memory and records every call so tests can check
//! which endpoint (and which page window) the store asked for.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use linkdeck::api::{
    LinkApi, LinkEntry, LinkPage, LinkPayload, LinkStats, PageQuery, QrPreferences,
    ResolvedLink, SessionUser,
};
use linkdeck::errors::{LinkdeckError, Result};

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

pub fn link(id: i64, code: &str) -> LinkEntry {
    LinkEntry {
        id,
        short_code: code.to_string(),
        url: format!("https://example.com/{}", code),
        description: None,
        enabled: true,
        active_from: None,
        active_until: None,
        qr: QrPreferences::default(),
        access_count: id as u64 * 10,
        security_level: None,
        created_at: created_at(),
        updated_at: None,
        owner_id: Some(1),
    }
}

/// `count` links with ids 1..=count and codes `c1`, `c2`, ...
pub fn links(count: i64) -> Vec<LinkEntry> {
    (1..=count).map(|i| link(i, &format!("c{}", i))).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(String),
    List(PageQuery),
    Get(i64),
    Update(i64),
    Delete(i64),
    Transfer(i64, i64),
    Stats(i64),
    Resolve(String),
    Redirect(String),
    AdminSearch(String, PageQuery),
    AdminDisable(String),
    AdminView(String),
    Session,
}

pub struct FakeApi {
    pub links: Mutex<Vec<LinkEntry>>,
    pub calls: Mutex<Vec<Call>>,
    /// 下一次调用返回的错误
    pub fail_next: Mutex<Option<LinkdeckError>>,
    /// transfer / disable 是否返回完整记录
    pub echo_records: bool,
    pub session: Option<SessionUser>,
}

impl FakeApi {
    pub fn new(links: Vec<LinkEntry>) -> Self {
        Self {
            links: Mutex::new(links),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            echo_records: false,
            session: Some(SessionUser {
                id: 1,
                username: "alice".into(),
                is_admin: false,
            }),
        }
    }

    pub fn admin(mut self) -> Self {
        if let Some(user) = self.session.as_mut() {
            user.is_admin = true;
        }
        self
    }

    pub fn signed_out(mut self) -> Self {
        self.session = None;
        self
    }

    pub fn echoing(mut self) -> Self {
        self.echo_records = true;
        self
    }

    pub fn fail_with(&self, error: LinkdeckError) {
        *self.fail_next.lock() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().last().cloned()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().push(call);
        match self.fail_next.lock().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn find<F: Fn(&LinkEntry) -> bool>(&self, pred: F) -> Result<LinkEntry> {
        self.links
            .lock()
            .iter()
            .find(|l| pred(l))
            .cloned()
            .ok_or_else(|| LinkdeckError::api(404, Some("Link not found")))
    }

    fn modify<F: FnOnce(&mut LinkEntry)>(&self, id: i64, change: F) -> Result<LinkEntry> {
        let mut links = self.links.lock();
        let entry = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LinkdeckError::api(404, Some("Link not found")))?;
        change(entry);
        Ok(entry.clone())
    }

    fn page_of(items: Vec<LinkEntry>, page: PageQuery) -> LinkPage {
        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();
        LinkPage { items, total }
    }
}

#[async_trait]
impl LinkApi for FakeApi {
    async fn create_link(&self, payload: &LinkPayload) -> Result<LinkEntry> {
        self.record(Call::Create(payload.url.clone()))?;
        let mut links = self.links.lock();
        let id = links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let mut created = link(id, &format!("new{}", id));
        created.url = payload.url.clone();
        created.description = payload.description.clone();
        created.enabled = payload.enabled;
        created.active_from = payload.active_from;
        created.active_until = payload.active_until;
        created.qr = payload.qr.clone();
        created.access_count = 0;
        links.insert(0, created.clone());
        Ok(created)
    }

    async fn list_links(&self, page: PageQuery) -> Result<LinkPage> {
        self.record(Call::List(page))?;
        Ok(Self::page_of(self.links.lock().clone(), page))
    }

    async fn get_link(&self, id: i64) -> Result<LinkEntry> {
        self.record(Call::Get(id))?;
        self.find(|l| l.id == id)
    }

    async fn update_link(&self, id: i64, payload: &LinkPayload) -> Result<LinkEntry> {
        self.record(Call::Update(id))?;
        self.modify(id, |entry| {
            entry.url = payload.url.clone();
            entry.description = payload.description.clone();
            entry.enabled = payload.enabled;
            entry.active_from = payload.active_from;
            entry.active_until = payload.active_until;
            entry.qr = payload.qr.clone();
            entry.updated_at = Some(created_at());
        })
    }

    async fn delete_link(&self, id: i64) -> Result<()> {
        self.record(Call::Delete(id))?;
        let mut links = self.links.lock();
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Err(LinkdeckError::api(404, Some("Link not found")));
        }
        Ok(())
    }

    async fn transfer_link(&self, id: i64, new_owner_id: i64) -> Result<Option<LinkEntry>> {
        self.record(Call::Transfer(id, new_owner_id))?;
        let updated = self.modify(id, |entry| entry.owner_id = Some(new_owner_id))?;
        Ok(self.echo_records.then_some(updated))
    }

    async fn link_stats(&self, id: i64) -> Result<LinkStats> {
        self.record(Call::Stats(id))?;
        let entry = self.find(|l| l.id == id)?;
        Ok(LinkStats {
            link_id: id,
            access_count: entry.access_count,
            last_accessed_at: Some(created_at()),
            security_level: entry.security_level,
            daily: Vec::new(),
        })
    }

    async fn resolve_code(&self, code: &str) -> Result<ResolvedLink> {
        self.record(Call::Resolve(code.to_string()))?;
        let entry = self.find(|l| l.short_code == code)?;
        Ok(ResolvedLink {
            short_code: entry.short_code,
            url: entry.url,
            enabled: entry.enabled,
            active_from: entry.active_from,
            active_until: entry.active_until,
        })
    }

    async fn redirect_target(&self, code: &str) -> Result<String> {
        self.record(Call::Redirect(code.to_string()))?;
        self.find(|l| l.short_code == code).map(|l| l.url)
    }

    async fn admin_search(&self, query: &str, page: PageQuery) -> Result<LinkPage> {
        self.record(Call::AdminSearch(query.to_string(), page))?;
        let matches = self
            .links
            .lock()
            .iter()
            .filter(|l| l.short_code.contains(query) || l.url.contains(query))
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn admin_disable(&self, code: &str) -> Result<Option<LinkEntry>> {
        self.record(Call::AdminDisable(code.to_string()))?;
        let id = self.find(|l| l.short_code == code)?.id;
        let updated = self.modify(id, |entry| entry.enabled = false)?;
        Ok(self.echo_records.then_some(updated))
    }

    async fn admin_view(&self, code: &str) -> Result<LinkEntry> {
        self.record(Call::AdminView(code.to_string()))?;
        self.find(|l| l.short_code == code)
    }

    async fn current_session(&self) -> Result<SessionUser> {
        self.record(Call::Session)?;
        self.session
            .clone()
            .ok_or_else(|| LinkdeckError::api(401, None::<String>))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
