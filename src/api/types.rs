//! Wire types for the link API
//!
//! All bodies are JSON with snake_case keys and RFC 3339 timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 服务端计算的目标地址风险等级，客户端只读
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SecurityLevel {
    Safe,
    Moderate,
    Risky,
    Dangerous,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// 链接级别的二维码偏好
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPreferences {
    #[serde(default)]
    pub with_logo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// A short link as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: i64,
    pub short_code: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub active_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub qr: QrPreferences,
    #[serde(default)]
    pub access_count: u64,
    #[serde(default)]
    pub security_level: Option<SecurityLevel>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

fn default_enabled() -> bool {
    true
}

/// 链接当前是否处于可访问窗口内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Disabled,
    Scheduled,
    Active,
    Ended,
}

impl LinkEntry {
    pub fn availability_at(&self, now: DateTime<Utc>) -> Availability {
        if !self.enabled {
            return Availability::Disabled;
        }
        if let Some(from) = self.active_from
            && now < from
        {
            return Availability::Scheduled;
        }
        if let Some(until) = self.active_until
            && now >= until
        {
            return Availability::Ended;
        }
        Availability::Active
    }

    pub fn availability(&self) -> Availability {
        self.availability_at(Utc::now())
    }

    /// 编辑时整条回写用的请求体
    pub fn to_payload(&self) -> LinkPayload {
        LinkPayload {
            url: self.url.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
            active_from: self.active_from,
            active_until: self.active_until,
            qr: self.qr.clone(),
        }
    }
}

/// Request body for `POST /links` and `PUT /links/{id}`
///
/// Server-owned fields (access counter, security level) are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPayload {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub qr: QrPreferences,
}

impl LinkPayload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            enabled: true,
            active_from: None,
            active_until: None,
            qr: QrPreferences::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPage {
    #[serde(default)]
    pub items: Vec<LinkEntry>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub new_owner_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    pub link_id: i64,
    #[serde(default)]
    pub access_count: u64,
    #[serde(default)]
    pub last_accessed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub security_level: Option<SecurityLevel>,
    #[serde(default)]
    pub daily: Vec<DailyCount>,
}

/// Public view of a short code (`GET /links/access/{code}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub short_code: String,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub active_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// 分页查询参数（limit / offset）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u64,
    pub offset: u64,
}

/// 服务端错误响应体，兼容 `message` 与 `error` 两种字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
