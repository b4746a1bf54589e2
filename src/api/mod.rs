//! Link API client layer
//!
//! `LinkApi` is the seam between the client-side store and the remote
//! URL-shortening service. `HttpLinkApi` talks to the real server; tests plug
//! in an in-memory implementation.
//!
//! ```text
//! TUI / CLI → LinkStore → dyn LinkApi ──→ HttpLinkApi (ureq, spawn_blocking)
//! ```

mod http;
pub mod routes;
pub mod types;

pub use http::HttpLinkApi;
pub use types::{
    Availability, DailyCount, LinkEntry, LinkPage, LinkPayload, LinkStats, PageQuery,
    QrPreferences, ResolvedLink, SecurityLevel, SessionUser,
};

use async_trait::async_trait;

use crate::errors::Result;

/// Remote link service
///
/// Every method maps to exactly one HTTP endpoint. No retries happen at this
/// layer.
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// `POST /links`
    async fn create_link(&self, payload: &LinkPayload) -> Result<LinkEntry>;

    /// `GET /links?limit=&offset=`
    async fn list_links(&self, page: PageQuery) -> Result<LinkPage>;

    /// `GET /links/{id}`
    async fn get_link(&self, id: i64) -> Result<LinkEntry>;

    /// `PUT /links/{id}` (full-record replace)
    async fn update_link(&self, id: i64, payload: &LinkPayload) -> Result<LinkEntry>;

    /// `DELETE /links/{id}`
    async fn delete_link(&self, id: i64) -> Result<()>;

    /// `POST /links/{id}/transfer`; `None` when the server answers without a body
    async fn transfer_link(&self, id: i64, new_owner_id: i64) -> Result<Option<LinkEntry>>;

    /// `GET /links/{id}/stats`
    async fn link_stats(&self, id: i64) -> Result<LinkStats>;

    /// `GET /links/access/{code}`
    async fn resolve_code(&self, code: &str) -> Result<ResolvedLink>;

    /// `GET /links/redirect/{code}`, returns the `Location` target
    async fn redirect_target(&self, code: &str) -> Result<String>;

    /// `GET /links/admin/search?q=&limit=&offset=`
    async fn admin_search(&self, query: &str, page: PageQuery) -> Result<LinkPage>;

    /// `POST /links/admin/{code}/disable`; `None` when the server answers without a body
    async fn admin_disable(&self, code: &str) -> Result<Option<LinkEntry>>;

    /// `GET /links/admin/{code}/view`
    async fn admin_view(&self, code: &str) -> Result<LinkEntry>;

    /// `GET /auth/session`
    async fn current_session(&self) -> Result<SessionUser>;

    fn name(&self) -> &'static str;
}
