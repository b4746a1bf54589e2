//! HTTP implementation of [`LinkApi`]
//!
//! ureq 是同步客户端，所有请求都放进 `spawn_blocking` 执行。
//! 重定向不自动跟随，`redirect_target` 需要读取原始的 3xx 响应。

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ureq::Agent;
use uuid::Uuid;

use super::types::{
    ErrorBody, LinkEntry, LinkPage, LinkPayload, LinkStats, PageQuery, ResolvedLink,
    SessionUser, TransferRequest,
};
use super::{LinkApi, routes};
use crate::config::ApiConfig;
use crate::errors::{LinkdeckError, Result};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug)]
struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    fn page(self, page: PageQuery) -> Self {
        self.query("limit", page.limit).query("offset", page.offset)
    }

    fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// 读取完毕的响应
#[derive(Debug)]
struct RawResponse {
    status: u16,
    location: Option<String>,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// 非 2xx 响应转换为错误，服务端 message 原样保留
    fn into_error(self) -> LinkdeckError {
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(ErrorBody::into_message);
        LinkdeckError::api(self.status, message)
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| LinkdeckError::serialization(format!("Invalid response body: {}", e)))
    }

    fn decode_optional<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        self.decode().map(Some)
    }
}

/// REST client backed by a shared ureq `Agent`
#[derive(Clone)]
pub struct HttpLinkApi {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpLinkApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_settings(
            &config.base_url,
            config.token.clone(),
            Duration::from_secs(config.timeout_secs.max(1)),
        )
    }

    pub fn with_settings(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn decorate<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        request_id: &str,
        query: &[(&'static str, String)],
    ) -> ureq::RequestBuilder<B> {
        builder = builder
            .header("Accept", "application/json")
            .header(REQUEST_ID_HEADER, request_id);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        for (key, value) in query {
            builder = builder.query(*key, value);
        }
        builder
    }

    /// 同步执行请求（在 spawn_blocking 中调用）
    fn execute_sync(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url(&request.path);
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, "{} {}", request.method, url);

        let result = match request.method {
            Method::Get => self
                .decorate(self.agent.get(&url), &request_id, &request.query)
                .call(),
            Method::Delete => self
                .decorate(self.agent.delete(&url), &request_id, &request.query)
                .call(),
            Method::Post | Method::Put => {
                let builder = if request.method == Method::Post {
                    self.agent.post(&url)
                } else {
                    self.agent.put(&url)
                };
                let builder = self.decorate(builder, &request_id, &request.query);
                match &request.body {
                    Some(body) => builder.send_json(body),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            warn!(request_id = %request_id, "{} {} failed: {}", request.method, url, e);
            match e {
                ureq::Error::Timeout(_) => LinkdeckError::network("Request timed out"),
                other => LinkdeckError::network(other.to_string()),
            }
        })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LinkdeckError::network(format!("Failed to read response: {}", e)))?;

        debug!(request_id = %request_id, status, "{} {} done", request.method, url);
        Ok(RawResponse {
            status,
            location,
            body,
        })
    }

    /// 异步包装，返回任意状态码的响应
    async fn send_raw(&self, request: ApiRequest) -> Result<RawResponse> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.execute_sync(request))
            .await
            .map_err(|e| LinkdeckError::network(format!("Request task failed: {}", e)))?
    }

    /// 只接受 2xx
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let raw = self.send_raw(request).await?;
        if raw.is_success() {
            Ok(raw)
        } else {
            Err(raw.into_error())
        }
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn create_link(&self, payload: &LinkPayload) -> Result<LinkEntry> {
        let request = ApiRequest::new(Method::Post, routes::LINKS).json(payload)?;
        self.send(request).await?.decode()
    }

    async fn list_links(&self, page: PageQuery) -> Result<LinkPage> {
        let request = ApiRequest::new(Method::Get, routes::LINKS).page(page);
        self.send(request).await?.decode()
    }

    async fn get_link(&self, id: i64) -> Result<LinkEntry> {
        self.send(ApiRequest::new(Method::Get, routes::link(id)))
            .await?
            .decode()
    }

    async fn update_link(&self, id: i64, payload: &LinkPayload) -> Result<LinkEntry> {
        let request = ApiRequest::new(Method::Put, routes::link(id)).json(payload)?;
        self.send(request).await?.decode()
    }

    async fn delete_link(&self, id: i64) -> Result<()> {
        self.send(ApiRequest::new(Method::Delete, routes::link(id))).await?;
        Ok(())
    }

    async fn transfer_link(&self, id: i64, new_owner_id: i64) -> Result<Option<LinkEntry>> {
        let request = ApiRequest::new(Method::Post, routes::transfer(id))
            .json(&TransferRequest { new_owner_id })?;
        self.send(request).await?.decode_optional()
    }

    async fn link_stats(&self, id: i64) -> Result<LinkStats> {
        self.send(ApiRequest::new(Method::Get, routes::stats(id)))
            .await?
            .decode()
    }

    async fn resolve_code(&self, code: &str) -> Result<ResolvedLink> {
        self.send(ApiRequest::new(Method::Get, routes::access(code)))
            .await?
            .decode()
    }

    async fn redirect_target(&self, code: &str) -> Result<String> {
        let raw = self
            .send_raw(ApiRequest::new(Method::Get, routes::redirect(code)))
            .await?;
        if !raw.is_redirect() {
            return Err(raw.into_error());
        }
        raw.location
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| LinkdeckError::api(raw.status, Some("Redirect without Location header")))
    }

    async fn admin_search(&self, query: &str, page: PageQuery) -> Result<LinkPage> {
        let request = ApiRequest::new(Method::Get, routes::ADMIN_SEARCH)
            .query("q", query)
            .page(page);
        self.send(request).await?.decode()
    }

    async fn admin_disable(&self, code: &str) -> Result<Option<LinkEntry>> {
        self.send(ApiRequest::new(Method::Post, routes::admin_disable(code)))
            .await?
            .decode_optional()
    }

    async fn admin_view(&self, code: &str) -> Result<LinkEntry> {
        self.send(ApiRequest::new(Method::Get, routes::admin_view(code)))
            .await?
            .decode()
    }

    async fn current_session(&self) -> Result<SessionUser> {
        self.send(ApiRequest::new(Method::Get, routes::SESSION))
            .await?
            .decode()
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

impl From<&ApiConfig> for HttpLinkApi {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config)
    }
}
