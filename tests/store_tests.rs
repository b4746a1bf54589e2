//! LinkStore integration tests
//!
//! Every store operation is exercised against the in-memory `FakeApi`.

mod common;

use std::sync::Arc;

use common::{Call, FakeApi, link, links};
use linkdeck::api::{LinkPayload, PageQuery};
use linkdeck::config::{PreferenceStore, Preferences};
use linkdeck::errors::{GENERIC_FAILURE_MESSAGE, LinkdeckError};
use linkdeck::store::LinkStore;
use tempfile::TempDir;

fn store_with(api: FakeApi, page_size: u64) -> (LinkStore, Arc<FakeApi>) {
    let api = Arc::new(api);
    (LinkStore::new(api.clone(), page_size), api)
}

// =============================================================================
// Listing and pagination
// =============================================================================

#[tokio::test]
async fn test_list_loads_first_page() {
    let (mut store, api) = store_with(FakeApi::new(links(25)), 10);
    store.list().await.unwrap();

    assert_eq!(store.links().len(), 10);
    assert_eq!(store.total(), 25);
    assert_eq!(store.pagination().current_page(), 1);
    assert_eq!(
        api.last_call(),
        Some(Call::List(PageQuery {
            limit: 10,
            offset: 0
        }))
    );
}

#[tokio::test]
async fn test_next_and_prev_page_move_offset() {
    let (mut store, api) = store_with(FakeApi::new(links(25)), 10);
    store.list().await.unwrap();

    store.next_page().await.unwrap();
    store.next_page().await.unwrap();
    assert_eq!(store.pagination().current_page(), 3);
    assert_eq!(store.links().len(), 5);
    assert_eq!(store.links()[0].short_code, "c21");

    // 已是最后一页，不再请求
    let calls_before = api.calls().len();
    store.next_page().await.unwrap();
    assert_eq!(api.calls().len(), calls_before);

    store.prev_page().await.unwrap();
    assert_eq!(store.pagination().offset(), 10);
}

#[tokio::test]
async fn test_prev_page_on_first_page_is_noop() {
    let (mut store, api) = store_with(FakeApi::new(links(3)), 10);
    store.list().await.unwrap();
    store.prev_page().await.unwrap();
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_failed_page_load_keeps_offset_and_links() {
    let (mut store, api) = store_with(FakeApi::new(links(25)), 10);
    store.list().await.unwrap();

    api.fail_with(LinkdeckError::network("connection refused"));
    assert!(store.next_page().await.is_err());
    assert_eq!(store.pagination().current_page(), 1);
    assert_eq!(store.links().len(), 10);
    assert_eq!(store.last_error(), Some(GENERIC_FAILURE_MESSAGE));

    store.next_page().await.unwrap();
    assert_eq!(store.pagination().current_page(), 2);
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn test_page_size_change_resets_offset() {
    let (mut store, _api) = store_with(FakeApi::new(links(25)), 10);
    store.list().await.unwrap();
    store.next_page().await.unwrap();

    assert_eq!(store.set_page_size(5), 5);
    assert_eq!(store.pagination().offset(), 0);
    assert_eq!(store.admin_pagination().page_size(), 5);

    // 超出范围的值被钳制
    assert_eq!(store.set_page_size(0), 1);
    assert_eq!(store.set_page_size(10_000), 200);
}

#[tokio::test]
async fn test_page_size_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let prefs = PreferenceStore::load(&path, Preferences::default());

    let api = Arc::new(FakeApi::new(links(3)));
    let mut store = LinkStore::with_preferences(api, prefs);
    store.set_page_size(7);

    let reloaded = PreferenceStore::load(&path, Preferences::default());
    assert_eq!(reloaded.page_size(), 7);
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_create_prepends_and_counts() {
    let (mut store, _api) = store_with(FakeApi::new(links(2)), 10);
    store.list().await.unwrap();

    let created = store
        .create(LinkPayload::new("https://rust-lang.org"))
        .await
        .unwrap();
    assert_eq!(store.links()[0].id, created.id);
    assert_eq!(store.total(), 3);
    assert_eq!(created.url, "https://rust-lang.org");
}

#[tokio::test]
async fn test_create_error_surfaces_server_message() {
    let (mut store, api) = store_with(FakeApi::new(links(2)), 10);
    store.list().await.unwrap();

    api.fail_with(LinkdeckError::api(409, Some("Short code already taken")));
    let err = store
        .create(LinkPayload::new("https://rust-lang.org"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(store.last_error(), Some("Short code already taken"));
    assert_eq!(store.links().len(), 2);
    assert_eq!(store.total(), 2);
}

#[tokio::test]
async fn test_update_replaces_cached_entry() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)), 10);
    store.list().await.unwrap();

    let mut payload = store.find(2).unwrap().to_payload();
    payload.description = Some("docs".into());
    store.update(2, payload).await.unwrap();

    assert_eq!(store.find(2).unwrap().description.as_deref(), Some("docs"));
    assert!(store.find(2).unwrap().updated_at.is_some());
}

#[tokio::test]
async fn test_delete_removes_entry_and_clears_current() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)), 10);
    store.list().await.unwrap();
    store.fetch(2).await.unwrap();
    store.load_stats(2).await.unwrap();

    store.delete(2).await.unwrap();
    assert!(store.find(2).is_none());
    assert_eq!(store.total(), 2);
    assert!(store.current().is_none());
    assert!(store.stats().is_none());
}

#[tokio::test]
async fn test_delete_missing_link_leaves_state() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)), 10);
    store.list().await.unwrap();

    assert!(store.delete(99).await.is_err());
    assert_eq!(store.links().len(), 3);
    assert_eq!(store.last_error(), Some("Link not found"));
}

#[tokio::test]
async fn test_transfer_without_body_patches_owner_locally() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)), 10);
    store.list().await.unwrap();

    let updated = store.transfer(1, 42).await.unwrap().unwrap();
    assert_eq!(updated.owner_id, Some(42));
    assert_eq!(store.find(1).unwrap().owner_id, Some(42));
}

#[tokio::test]
async fn test_transfer_with_body_uses_server_record() {
    let (mut store, api) = store_with(FakeApi::new(links(3)).echoing(), 10);
    store.list().await.unwrap();

    let updated = store.transfer(3, 7).await.unwrap().unwrap();
    assert_eq!(updated.owner_id, Some(7));
    assert_eq!(api.last_call(), Some(Call::Transfer(3, 7)));
}

#[tokio::test]
async fn test_fetch_sets_current_and_stats_are_kept() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)), 10);
    store.fetch(3).await.unwrap();
    assert_eq!(store.current().unwrap().short_code, "c3");

    let stats = store.load_stats(3).await.unwrap();
    assert_eq!(stats.access_count, 30);
    assert_eq!(store.stats().unwrap().link_id, 3);
}

// =============================================================================
// Public lookups
// =============================================================================

#[tokio::test]
async fn test_resolve_and_redirect() {
    let (mut store, _api) = store_with(FakeApi::new(vec![link(1, "promo")]), 10);

    let resolved = store.resolve("promo").await.unwrap();
    assert_eq!(resolved.url, "https://example.com/promo");
    assert_eq!(
        store.redirect_target("promo").await.unwrap(),
        "https://example.com/promo"
    );
    assert!(store.resolve("missing").await.is_err());
}

// =============================================================================
// Admin
// =============================================================================

#[tokio::test]
async fn test_admin_search_is_cached_separately() {
    let mut all = links(12);
    all.push(link(50, "promo-spring"));
    all.push(link(51, "promo-summer"));
    let (mut store, api) = store_with(FakeApi::new(all).admin(), 10);
    store.list().await.unwrap();

    store.admin_search("promo", 1).await.unwrap();
    assert_eq!(store.admin_query(), "promo");
    assert_eq!(store.admin_total(), 2);
    assert_eq!(store.admin_results().len(), 2);
    assert_eq!(store.links().len(), 10);
    assert_eq!(
        api.last_call(),
        Some(Call::AdminSearch(
            "promo".into(),
            PageQuery {
                limit: 10,
                offset: 0
            }
        ))
    );
}

#[tokio::test]
async fn test_admin_disable_patches_every_copy() {
    let (mut store, _api) = store_with(FakeApi::new(links(3)).admin(), 10);
    store.list().await.unwrap();
    store.admin_search("c2", 1).await.unwrap();
    store.admin_view("c2").await.unwrap();

    store.admin_disable("c2").await.unwrap();
    assert!(!store.find_by_code("c2").unwrap().enabled);
    assert!(!store.admin_results()[0].enabled);
    assert!(!store.current().unwrap().enabled);
    assert!(store.find_by_code("c1").unwrap().enabled);
}
