use std::fmt;

/// 服务端未返回错误信息时使用的兜底文案
pub const GENERIC_FAILURE_MESSAGE: &str = "Operation failed";

#[derive(Debug, Clone)]
pub enum LinkdeckError {
    /// 服务端返回了非 2xx 状态码
    Api { status: u16, message: Option<String> },
    Network(String),
    Unauthorized(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
    Render(String),
    Clipboard(String),
    DateParse(String),
}

impl LinkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::Api { .. } => "E001",
            LinkdeckError::Network(_) => "E002",
            LinkdeckError::Unauthorized(_) => "E003",
            LinkdeckError::Validation(_) => "E004",
            LinkdeckError::NotFound(_) => "E005",
            LinkdeckError::Serialization(_) => "E006",
            LinkdeckError::FileOperation(_) => "E007",
            LinkdeckError::Config(_) => "E008",
            LinkdeckError::Render(_) => "E009",
            LinkdeckError::Clipboard(_) => "E010",
            LinkdeckError::DateParse(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::Api { .. } => "API Error",
            LinkdeckError::Network(_) => "Network Error",
            LinkdeckError::Unauthorized(_) => "Unauthorized",
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::NotFound(_) => "Resource Not Found",
            LinkdeckError::Serialization(_) => "Serialization Error",
            LinkdeckError::FileOperation(_) => "File Operation Error",
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::Render(_) => "Render Error",
            LinkdeckError::Clipboard(_) => "Clipboard Error",
            LinkdeckError::DateParse(_) => "Date Parse Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::Api { message, .. } => {
                message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE)
            }
            LinkdeckError::Network(msg) => msg,
            LinkdeckError::Unauthorized(msg) => msg,
            LinkdeckError::Validation(msg) => msg,
            LinkdeckError::NotFound(msg) => msg,
            LinkdeckError::Serialization(msg) => msg,
            LinkdeckError::FileOperation(msg) => msg,
            LinkdeckError::Config(msg) => msg,
            LinkdeckError::Render(msg) => msg,
            LinkdeckError::Clipboard(msg) => msg,
            LinkdeckError::DateParse(msg) => msg,
        }
    }

    /// 面向用户的提示文本（toast / store 错误字段）
    ///
    /// 服务端给出的 message 原样透出，其余情况统一为兜底文案
    pub fn user_message(&self) -> String {
        match self {
            LinkdeckError::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            LinkdeckError::Unauthorized(msg)
            | LinkdeckError::NotFound(msg)
            | LinkdeckError::Validation(msg)
                if !msg.trim().is_empty() =>
            {
                msg.clone()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// HTTP 状态码（仅 API 类错误）
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkdeckError::Api { status, .. } => Some(*status),
            LinkdeckError::Unauthorized(_) => Some(401),
            LinkdeckError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// 便捷的构造函数
impl LinkdeckError {
    pub fn api<T: Into<String>>(status: u16, message: Option<T>) -> Self {
        LinkdeckError::Api {
            status,
            message: message.map(Into::into),
        }
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Network(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Unauthorized(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Render(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Clipboard(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::DateParse(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LinkdeckError {
    fn from(err: chrono::ParseError) -> Self {
        LinkdeckError::DateParse(err.to_string())
    }
}

impl From<image::ImageError> for LinkdeckError {
    fn from(err: image::ImageError) -> Self {
        LinkdeckError::Render(err.to_string())
    }
}

impl From<qrcode::types::QrError> for LinkdeckError {
    fn from(err: qrcode::types::QrError) -> Self {
        LinkdeckError::Render(format!("QR encoding failed: {}", err))
    }
}

impl From<csv::Error> for LinkdeckError {
    fn from(err: csv::Error) -> Self {
        LinkdeckError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_server_text() {
        let err = LinkdeckError::api(409, Some("Short code already taken"));
        assert_eq!(err.user_message(), "Short code already taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = LinkdeckError::api::<String>(500, None);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let err = LinkdeckError::api(500, Some("   "));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let err = LinkdeckError::network("connection refused");
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_api_error_message_without_body() {
        let err = LinkdeckError::api::<String>(502, None);
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_format_simple() {
        let err = LinkdeckError::validation("URL is required");
        assert_eq!(err.format_simple(), "Validation Error: URL is required");
        assert_eq!(format!("{}", err), err.format_simple());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: LinkdeckError = io.into();
        assert!(matches!(err, LinkdeckError::FileOperation(_)));
        assert!(err.message().contains("missing.png"));
    }
}
