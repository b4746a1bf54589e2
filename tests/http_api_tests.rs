//! HttpLinkApi tests against a local actix-web server
//!
//! The server runs on its own thread with an actix System and records every
//! request it receives, so each test can assert on the exact wire traffic.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, StatusCode};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use parking_lot::Mutex;
use serde_json::{Value, json};

use linkdeck::api::{HttpLinkApi, LinkApi, LinkPayload, PageQuery};
use linkdeck::errors::GENERIC_FAILURE_MESSAGE;

// =============================================================================
// Mock server
// =============================================================================

#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    query: String,
    authorization: Option<String>,
    request_id: Option<String>,
    body: String,
}

type SeenLog = Arc<Mutex<Vec<Seen>>>;

struct MockServer {
    base_url: String,
    seen: SeenLog,
    handle: ServerHandle,
}

impl MockServer {
    fn client(&self, token: Option<&str>) -> HttpLinkApi {
        HttpLinkApi::with_settings(
            &self.base_url,
            token.map(String::from),
            Duration::from_secs(5),
        )
    }

    fn last(&self) -> Seen {
        self.seen.lock().last().cloned().expect("no request recorded")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        // 不等待，线程随进程结束
        let _ = self.handle.stop(false);
    }
}

fn entry_json(id: i64, code: &str) -> Value {
    json!({
        "id": id,
        "short_code": code,
        "url": format!("https://example.com/{}", code),
        "description": null,
        "enabled": true,
        "active_from": null,
        "active_until": "2030-01-01T00:00:00Z",
        "qr": { "with_logo": true, "subtitle": "Promo" },
        "access_count": 12,
        "security_level": "safe",
        "created_at": "2025-01-01T00:00:00Z",
        "owner_id": 3
    })
}

fn error(status: StatusCode, body: Value) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

fn route(req: &HttpRequest, body: &str) -> HttpResponse {
    let path = req.path().trim_start_matches("/api");
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let method = req.method().clone();

    match (method, segments.as_slice()) {
        (Method::GET, ["auth", "session"]) => {
            if req.headers().contains_key("authorization") {
                HttpResponse::Ok().json(json!({"id": 3, "username": "alice", "is_admin": true}))
            } else {
                HttpResponse::Unauthorized().finish()
            }
        }
        (Method::GET, ["links"]) => HttpResponse::Ok().json(json!({
            "items": [entry_json(1, "a"), entry_json(2, "b")],
            "total": 42
        })),
        (Method::POST, ["links"]) => {
            let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);
            if payload["url"].as_str().is_some_and(|u| u.contains("taken")) {
                return error(
                    StatusCode::CONFLICT,
                    json!({"message": "Short code already taken"}),
                );
            }
            let mut created = entry_json(9, "new");
            created["url"] = payload["url"].clone();
            HttpResponse::Created().json(created)
        }
        (Method::GET, ["links", "admin", "search"]) => HttpResponse::Ok().json(json!({
            "items": [entry_json(5, "promo")],
            "total": 1
        })),
        (Method::POST, ["links", "admin", code, "disable"]) => {
            let mut entry = entry_json(5, code);
            entry["enabled"] = json!(false);
            HttpResponse::Ok().json(entry)
        }
        (Method::GET, ["links", "admin", code, "view"]) => {
            HttpResponse::Ok().json(entry_json(5, code))
        }
        (Method::GET, ["links", "access", code]) => HttpResponse::Ok().json(json!({
            "short_code": code,
            "url": "https://example.com/target",
            "enabled": true
        })),
        (Method::GET, ["links", "redirect", "gone"]) => {
            error(StatusCode::GONE, json!({"error": "Link expired"}))
        }
        (Method::GET, ["links", "redirect", "bare"]) => HttpResponse::Found().finish(),
        (Method::GET, ["links", "redirect", _]) => HttpResponse::Found()
            .insert_header(("Location", "https://example.com/target"))
            .finish(),
        (Method::GET, ["links", "500"]) => HttpResponse::InternalServerError()
            .content_type("text/html")
            .body("<html>oops</html>"),
        (Method::GET, ["links", "404"]) => {
            error(StatusCode::NOT_FOUND, json!({"error": "Link not found"}))
        }
        (Method::GET, ["links", id]) => {
            HttpResponse::Ok().json(entry_json(id.parse().unwrap_or(0), "x"))
        }
        (Method::PUT, ["links", id]) => {
            let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);
            let mut updated = entry_json(id.parse().unwrap_or(0), "x");
            updated["description"] = payload["description"].clone();
            HttpResponse::Ok().json(updated)
        }
        (Method::DELETE, ["links", _]) => HttpResponse::NoContent().finish(),
        (Method::POST, ["links", _, "transfer"]) => HttpResponse::NoContent().finish(),
        (Method::GET, ["links", id, "stats"]) => HttpResponse::Ok().json(json!({
            "link_id": id.parse::<i64>().unwrap_or(0),
            "access_count": 12,
            "last_accessed_at": "2025-02-01T08:00:00Z",
            "daily": [
                {"date": "2025-01-31", "count": 4},
                {"date": "2025-02-01", "count": 8}
            ]
        })),
        _ => HttpResponse::NotFound().finish(),
    }
}

async fn handle(req: HttpRequest, body: web::Bytes, seen: web::Data<SeenLog>) -> HttpResponse {
    let body = String::from_utf8_lossy(&body).to_string();
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    seen.lock().push(Seen {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: header("authorization"),
        request_id: header("x-request-id"),
        body: body.clone(),
    });
    route(&req, &body)
}

fn start_server() -> MockServer {
    let seen: SeenLog = Arc::new(Mutex::new(Vec::new()));
    let (tx, rx) = std::sync::mpsc::channel();

    let log = seen.clone();
    std::thread::spawn(move || {
        actix_rt::System::new().block_on(async move {
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(web::Data::new(log.clone()))
                    .default_service(web::to(handle))
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind mock server");
            let port = server.addrs()[0].port();
            let running = server.run();
            tx.send((port, running.handle())).expect("report port");
            let _ = running.await;
        });
    });

    let (port, handle) = rx.recv().expect("mock server did not start");
    MockServer {
        base_url: format!("http://127.0.0.1:{}/api", port),
        seen,
        handle,
    }
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_list_sends_page_window_and_headers() {
    let server = start_server();
    let api = server.client(Some("secret"));

    let page = api
        .list_links(PageQuery {
            limit: 20,
            offset: 40,
        })
        .await
        .unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].qr.subtitle.as_deref(), Some("Promo"));

    let seen = server.last();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.path, "/api/links");
    assert!(seen.query.contains("limit=20"));
    assert!(seen.query.contains("offset=40"));
    assert_eq!(seen.authorization.as_deref(), Some("Bearer secret"));
    assert!(seen.request_id.is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let server = start_server();
    let api = server.client(None);
    api.get_link(1).await.unwrap();
    api.get_link(2).await.unwrap();

    let seen = server.seen.lock().clone();
    assert_eq!(seen.len(), 2);
    assert_ne!(seen[0].request_id, seen[1].request_id);
    assert!(seen[0].authorization.is_none());
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = start_server();
    let api = server.client(None);

    let mut payload = LinkPayload::new("https://rust-lang.org");
    payload.description = Some("home".into());
    let created = api.create_link(&payload).await.unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.url, "https://rust-lang.org");

    let seen = server.last();
    assert_eq!(seen.method, "POST");
    let body: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body["url"], "https://rust-lang.org");
    assert_eq!(body["description"], "home");
    assert!(body.get("access_count").is_none());
}

#[tokio::test]
async fn test_update_and_delete_paths() {
    let server = start_server();
    let api = server.client(None);

    let mut payload = LinkPayload::new("https://example.com");
    payload.description = Some("edited".into());
    let updated = api.update_link(7, &payload).await.unwrap();
    assert_eq!(updated.description.as_deref(), Some("edited"));
    assert_eq!(server.last().method, "PUT");
    assert_eq!(server.last().path, "/api/links/7");

    api.delete_link(7).await.unwrap();
    assert_eq!(server.last().method, "DELETE");
}

#[tokio::test]
async fn test_transfer_with_empty_response() {
    let server = start_server();
    let api = server.client(None);

    let result = api.transfer_link(4, 11).await.unwrap();
    assert!(result.is_none());

    let seen = server.last();
    assert_eq!(seen.path, "/api/links/4/transfer");
    let body: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body["new_owner_id"], 11);
}

#[tokio::test]
async fn test_stats_decode_daily_counts() {
    let server = start_server();
    let stats = server.client(None).link_stats(3).await.unwrap();
    assert_eq!(stats.link_id, 3);
    assert_eq!(stats.daily.len(), 2);
    assert_eq!(stats.daily[1].count, 8);
    assert!(stats.security_level.is_none());
}

#[tokio::test]
async fn test_admin_endpoints() {
    let server = start_server();
    let api = server.client(Some("admin"));

    let page = api
        .admin_search(
            "promo spring",
            PageQuery {
                limit: 10,
                offset: 0,
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    let seen = server.last();
    assert_eq!(seen.path, "/api/links/admin/search");
    assert!(seen.query.contains("q=promo"));

    let disabled = api.admin_disable("promo").await.unwrap().unwrap();
    assert!(!disabled.enabled);
    assert_eq!(server.last().path, "/api/links/admin/promo/disable");

    let viewed = api.admin_view("promo").await.unwrap();
    assert_eq!(viewed.short_code, "promo");
}

#[tokio::test]
async fn test_session_requires_token() {
    let server = start_server();

    let user = server.client(Some("t")).current_session().await.unwrap();
    assert!(user.is_admin);

    let err = server.client(None).current_session().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

// =============================================================================
// Redirect and lookups
// =============================================================================

#[tokio::test]
async fn test_redirect_reads_location_without_following() {
    let server = start_server();
    let api = server.client(None);

    let target = api.redirect_target("promo").await.unwrap();
    assert_eq!(target, "https://example.com/target");
    assert_eq!(server.seen.lock().len(), 1);
}

#[tokio::test]
async fn test_redirect_without_location_is_error() {
    let server = start_server();
    let err = server.client(None).redirect_target("bare").await.unwrap_err();
    assert_eq!(err.status(), Some(302));
}

#[tokio::test]
async fn test_redirect_non_3xx_surfaces_message() {
    let server = start_server();
    let err = server.client(None).redirect_target("gone").await.unwrap_err();
    assert_eq!(err.status(), Some(410));
    assert_eq!(err.user_message(), "Link expired");
}

#[tokio::test]
async fn test_resolve_code() {
    let server = start_server();
    let resolved = server.client(None).resolve_code("promo").await.unwrap();
    assert_eq!(resolved.short_code, "promo");
    assert_eq!(server.last().path, "/api/links/access/promo");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_conflict_message_is_kept() {
    let server = start_server();
    let err = server
        .client(None)
        .create_link(&LinkPayload::new("https://taken.example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Short code already taken");
}

#[tokio::test]
async fn test_error_field_and_html_bodies() {
    let server = start_server();
    let api = server.client(None);

    let err = api.get_link(404).await.unwrap_err();
    assert_eq!(err.user_message(), "Link not found");

    let err = api.get_link(500).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let api = HttpLinkApi::with_settings("http://127.0.0.1:1/api", None, Duration::from_secs(2));
    let err = api.get_link(1).await.unwrap_err();
    assert!(err.status().is_none());
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}
