//! 链接表单状态
//!
//! 管理添加/编辑链接时的表单输入、焦点和校验错误

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::api::LinkEntry;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Url,
    Description,
    ActiveFrom,
    ActiveUntil,
    Enabled,
    WithLogo,
    Subtitle,
}

impl FormField {
    /// 所有字段的顺序
    pub const ALL: [Self; 7] = [
        Self::Url,
        Self::Description,
        Self::ActiveFrom,
        Self::ActiveUntil,
        Self::Enabled,
        Self::WithLogo,
        Self::Subtitle,
    ];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 字段 key（用于错误映射和 CLI 输出）
    pub fn key(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Description => "description",
            Self::ActiveFrom => "active_from",
            Self::ActiveUntil => "active_until",
            Self::Enabled => "enabled",
            Self::WithLogo => "with_logo",
            Self::Subtitle => "subtitle",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Url => "Target URL",
            Self::Description => "Description",
            Self::ActiveFrom => "Active From",
            Self::ActiveUntil => "Active Until",
            Self::Enabled => "Enabled",
            Self::WithLogo => "QR Logo",
            Self::Subtitle => "QR Subtitle",
        }
    }

    /// 布尔字段用空格切换，不接受文本输入
    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::Enabled | Self::WithLogo)
    }
}

pub type FieldErrors = HashMap<FormField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkForm {
    pub mode: FormMode,
    pub url: String,
    pub description: String,
    pub active_from: String,
    pub active_until: String,
    pub enabled: bool,
    pub with_logo: bool,
    pub subtitle: String,
    pub focus: FormField,
    pub errors: FieldErrors,
}

impl Default for LinkForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            url: String::new(),
            description: String::new(),
            active_from: String::new(),
            active_until: String::new(),
            enabled: true,
            with_logo: false,
            subtitle: String::new(),
            focus: FormField::default(),
            errors: FieldErrors::new(),
        }
    }
}

fn format_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

impl LinkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 编辑模式，用现有记录预填
    pub fn for_entry(entry: &LinkEntry) -> Self {
        Self {
            mode: FormMode::Edit { id: entry.id },
            url: entry.url.clone(),
            description: entry.description.clone().unwrap_or_default(),
            active_from: format_time(entry.active_from),
            active_until: format_time(entry.active_until),
            enabled: entry.enabled,
            with_logo: entry.qr.with_logo,
            subtitle: entry.qr.subtitle.clone().unwrap_or_default(),
            focus: FormField::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Url => Some(&self.url),
            FormField::Description => Some(&self.description),
            FormField::ActiveFrom => Some(&self.active_from),
            FormField::ActiveUntil => Some(&self.active_until),
            FormField::Subtitle => Some(&self.subtitle),
            FormField::Enabled | FormField::WithLogo => None,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Url => Some(&mut self.url),
            FormField::Description => Some(&mut self.description),
            FormField::ActiveFrom => Some(&mut self.active_from),
            FormField::ActiveUntil => Some(&mut self.active_until),
            FormField::Subtitle => Some(&mut self.subtitle),
            FormField::Enabled | FormField::WithLogo => None,
        }
    }

    pub fn flag(&self, field: FormField) -> Option<bool> {
        match field {
            FormField::Enabled => Some(self.enabled),
            FormField::WithLogo => Some(self.with_logo),
            _ => None,
        }
    }

    /// 向当前字段追加字符，编辑后清除该字段的错误
    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        if let Some(input) = self.text_mut(field) {
            input.push(c);
            self.errors.remove(&field);
        }
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        if let Some(input) = self.text_mut(field) {
            input.pop();
            self.errors.remove(&field);
        }
    }

    /// 切换当前布尔字段
    pub fn toggle(&mut self) {
        match self.focus {
            FormField::Enabled => self.enabled = !self.enabled,
            FormField::WithLogo => self.with_logo = !self.with_logo,
            _ => {}
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 按字段顺序排列的错误
    pub fn ordered_errors(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .iter()
            .filter_map(|f| self.error(*f).map(|e| (*f, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Url.next(), FormField::Description);
        assert_eq!(FormField::Subtitle.next(), FormField::Url);
        assert_eq!(FormField::Url.prev(), FormField::Subtitle);
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = LinkForm::new();
        form.errors.insert(FormField::Url, "URL is required".into());
        form.push_char('h');
        assert_eq!(form.url, "h");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_toggle_only_on_flags() {
        let mut form = LinkForm::new();
        form.toggle();
        assert!(form.enabled);

        form.focus = FormField::Enabled;
        form.toggle();
        assert!(!form.enabled);
        form.push_char('x');
        assert_eq!(form.text(FormField::Enabled), None);
    }
}
