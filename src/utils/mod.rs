pub mod time_parser;
pub mod url_validator;

pub use time_parser::TimeParser;
pub use url_validator::{UrlValidationError, validate_url};

/// 按字符数截断，超出部分用省略号表示
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
