//! 目标地址校验
//!
//! 只要求是合法的绝对 URL，并拦截能执行脚本或读取本地资源的协议

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    DangerousProtocol(String),
    NotAbsolute,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL is required"),
            Self::DangerousProtocol(proto) => write!(f, "Protocol not allowed: {}", proto),
            Self::NotAbsolute => write!(f, "URL must be absolute (e.g. https://example.com)"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 可执行脚本或访问本地资源的协议
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 校验并返回解析后的 URL
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = input.to_ascii_lowercase();
    if let Some(proto) = DANGEROUS_PROTOCOLS.iter().find(|p| lower.starts_with(**p)) {
        return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
    }

    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(UrlValidationError::NotAbsolute),
        Err(e) => Err(UrlValidationError::InvalidFormat(e.to_string())),
    }
}
