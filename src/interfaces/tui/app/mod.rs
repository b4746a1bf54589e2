//! TUI application state and the operations behind each key binding

mod admin_operations;
mod link_operations;
mod navigation;
mod qr_operations;
mod search;
mod session;
mod state;

pub use state::{AdminFocus, App, CurrentScreen};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;

    use super::App;
    use crate::api::{
        LinkApi, LinkEntry, LinkPage, LinkPayload, LinkStats, PageQuery, QrPreferences,
        ResolvedLink, SessionUser,
    };
    use crate::config::StaticConfig;
    use crate::errors::{LinkdeckError, Result};
    use crate::notify::ToastNotifier;
    use crate::store::LinkStore;

    pub fn entry(id: i64, code: &str) -> LinkEntry {
        LinkEntry {
            id,
            short_code: code.to_string(),
            url: format!("https://example.com/{}", code),
            description: None,
            enabled: true,
            active_from: None,
            active_until: None,
            qr: QrPreferences::default(),
            access_count: 0,
            security_level: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
            owner_id: Some(1),
        }
    }

    /// 内存中的后端，`fail` 非空时下一次调用返回该错误
    pub struct MemoryApi {
        pub links: Mutex<Vec<LinkEntry>>,
        pub admin: bool,
        pub signed_in: bool,
        pub fail: Mutex<Option<LinkdeckError>>,
    }

    impl MemoryApi {
        pub fn new(links: Vec<LinkEntry>) -> Self {
            Self {
                links: Mutex::new(links),
                admin: false,
                signed_in: true,
                fail: Mutex::new(None),
            }
        }

        fn check(&self) -> Result<()> {
            match self.fail.lock().take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn find(&self, id: i64) -> Result<LinkEntry> {
            self.links
                .lock()
                .iter()
                .find(|l| l.id == id)
                .cloned()
                .ok_or_else(|| LinkdeckError::api(404, Some("Link not found")))
        }
    }

    #[async_trait]
    impl LinkApi for MemoryApi {
        async fn create_link(&self, payload: &LinkPayload) -> Result<LinkEntry> {
            self.check()?;
            let mut links = self.links.lock();
            let id = links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
            let mut created = entry(id, &format!("n{}", id));
            created.url = payload.url.clone();
            created.description = payload.description.clone();
            created.enabled = payload.enabled;
            created.qr = payload.qr.clone();
            links.insert(0, created.clone());
            Ok(created)
        }

        async fn list_links(&self, page: PageQuery) -> Result<LinkPage> {
            self.check()?;
            let links = self.links.lock();
            let items = links
                .iter()
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .cloned()
                .collect();
            Ok(LinkPage {
                items,
                total: links.len() as u64,
            })
        }

        async fn get_link(&self, id: i64) -> Result<LinkEntry> {
            self.check()?;
            self.find(id)
        }

        async fn update_link(&self, id: i64, payload: &LinkPayload) -> Result<LinkEntry> {
            self.check()?;
            let mut updated = self.find(id)?;
            updated.url = payload.url.clone();
            updated.description = payload.description.clone();
            updated.enabled = payload.enabled;
            updated.active_from = payload.active_from;
            updated.active_until = payload.active_until;
            updated.qr = payload.qr.clone();
            let mut links = self.links.lock();
            if let Some(slot) = links.iter_mut().find(|l| l.id == id) {
                *slot = updated.clone();
            }
            Ok(updated)
        }

        async fn delete_link(&self, id: i64) -> Result<()> {
            self.check()?;
            self.links.lock().retain(|l| l.id != id);
            Ok(())
        }

        async fn transfer_link(&self, id: i64, _new_owner_id: i64) -> Result<Option<LinkEntry>> {
            self.check()?;
            self.find(id).map(|_| None)
        }

        async fn link_stats(&self, id: i64) -> Result<LinkStats> {
            self.check()?;
            let link = self.find(id)?;
            Ok(LinkStats {
                link_id: id,
                access_count: link.access_count,
                last_accessed_at: None,
                security_level: None,
                daily: Vec::new(),
            })
        }

        async fn resolve_code(&self, code: &str) -> Result<ResolvedLink> {
            self.check()?;
            Err(LinkdeckError::api(404, Some(format!("{} not found", code))))
        }

        async fn redirect_target(&self, code: &str) -> Result<String> {
            self.check()?;
            Err(LinkdeckError::api(404, Some(format!("{} not found", code))))
        }

        async fn admin_search(&self, query: &str, page: PageQuery) -> Result<LinkPage> {
            self.check()?;
            let matches: Vec<LinkEntry> = self
                .links
                .lock()
                .iter()
                .filter(|l| l.short_code.contains(query) || l.url.contains(query))
                .cloned()
                .collect();
            let total = matches.len() as u64;
            let items = matches
                .into_iter()
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .collect();
            Ok(LinkPage { items, total })
        }

        async fn admin_disable(&self, code: &str) -> Result<Option<LinkEntry>> {
            self.check()?;
            let mut links = self.links.lock();
            if let Some(link) = links.iter_mut().find(|l| l.short_code == code) {
                link.enabled = false;
            }
            Ok(None)
        }

        async fn admin_view(&self, code: &str) -> Result<LinkEntry> {
            self.check()?;
            self.links
                .lock()
                .iter()
                .find(|l| l.short_code == code)
                .cloned()
                .ok_or_else(|| LinkdeckError::api(404, None::<String>))
        }

        async fn current_session(&self) -> Result<SessionUser> {
            self.check()?;
            if !self.signed_in {
                return Err(LinkdeckError::api(401, None::<String>));
            }
            Ok(SessionUser {
                id: 1,
                username: "alice".into(),
                is_admin: self.admin,
            })
        }

        fn name(&self) -> &'static str {
            "memory"
        }
    }

    pub fn app_with_api(api: Arc<MemoryApi>) -> App {
        let config = Arc::new(StaticConfig::default());
        let store = LinkStore::new(api, 20);
        App::with_store(config, store, ToastNotifier::new(std::time::Duration::ZERO))
    }

    /// 已登录并加载了第一页的 App
    pub async fn app_with_links(links: Vec<LinkEntry>) -> App {
        let mut app = app_with_api(Arc::new(MemoryApi::new(links)));
        app.check_session().await;
        app
    }
}
