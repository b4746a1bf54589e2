//! REST 路径
//!
//! 短码作为路径段时需要转义

use urlencoding::encode;

pub const LINKS: &str = "/links";
pub const ADMIN_SEARCH: &str = "/links/admin/search";
pub const SESSION: &str = "/auth/session";

pub fn link(id: i64) -> String {
    format!("{}/{}", LINKS, id)
}

pub fn transfer(id: i64) -> String {
    format!("{}/{}/transfer", LINKS, id)
}

pub fn stats(id: i64) -> String {
    format!("{}/{}/stats", LINKS, id)
}

pub fn access(code: &str) -> String {
    format!("{}/access/{}", LINKS, encode(code))
}

pub fn redirect(code: &str) -> String {
    format!("{}/redirect/{}", LINKS, encode(code))
}

pub fn admin_disable(code: &str) -> String {
    format!("{}/admin/{}/disable", LINKS, encode(code))
}

pub fn admin_view(code: &str) -> String {
    format!("{}/admin/{}/view", LINKS, encode(code))
}
