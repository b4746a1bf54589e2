//! 通知文案（中英文）
//!
//! 只覆盖 toast 与状态栏用到的少量提示，界面其余文字保持英文。

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn next(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    LinkCreated,
    LinkUpdated,
    LinkDeleted,
    LinkTransferred,
    LinkDisabled,
    FormInvalid,
    QrSaved,
    QrCopied,
    QrCopiedUrl,
    SessionChecking,
    SessionDenied,
    AdminOnly,
}

/// 取对应语言的提示文本
pub fn t(lang: Language, msg: Msg) -> &'static str {
    match (lang, msg) {
        (Language::En, Msg::LinkCreated) => "Link created",
        (Language::En, Msg::LinkUpdated) => "Link updated",
        (Language::En, Msg::LinkDeleted) => "Link deleted",
        (Language::En, Msg::LinkTransferred) => "Ownership transferred",
        (Language::En, Msg::LinkDisabled) => "Link disabled",
        (Language::En, Msg::FormInvalid) => "Please fix the highlighted fields",
        (Language::En, Msg::QrSaved) => "QR code saved",
        (Language::En, Msg::QrCopied) => "QR code copied to clipboard",
        (Language::En, Msg::QrCopiedUrl) => "Image copy failed, URL copied instead",
        (Language::En, Msg::SessionChecking) => "Checking session...",
        (Language::En, Msg::SessionDenied) => "Not signed in",
        (Language::En, Msg::AdminOnly) => "Admin permission required",

        (Language::Zh, Msg::LinkCreated) => "链接已创建",
        (Language::Zh, Msg::LinkUpdated) => "链接已更新",
        (Language::Zh, Msg::LinkDeleted) => "链接已删除",
        (Language::Zh, Msg::LinkTransferred) => "所有权已转移",
        (Language::Zh, Msg::LinkDisabled) => "链接已禁用",
        (Language::Zh, Msg::FormInvalid) => "请修正标记的字段",
        (Language::Zh, Msg::QrSaved) => "二维码已保存",
        (Language::Zh, Msg::QrCopied) => "二维码已复制到剪贴板",
        (Language::Zh, Msg::QrCopiedUrl) => "图片复制失败，已改为复制链接",
        (Language::Zh, Msg::SessionChecking) => "正在检查会话...",
        (Language::Zh, Msg::SessionDenied) => "未登录",
        (Language::Zh, Msg::AdminOnly) => "需要管理员权限",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::from_str("zh").unwrap(), Language::Zh);
        assert_eq!(Language::from_str("EN").unwrap(), Language::En);
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_language_cycle() {
        assert_eq!(Language::En.next(), Language::Zh);
        assert_eq!(Language::Zh.next(), Language::En);
    }

    #[test]
    fn test_messages_differ_by_language() {
        assert_ne!(t(Language::En, Msg::LinkCreated), t(Language::Zh, Msg::LinkCreated));
    }
}
