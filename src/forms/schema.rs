//! 表单校验规则
//!
//! - url：必填，绝对地址，拦截危险协议
//! - description：最多 500 字符
//! - active_from / active_until：可选，同时存在时开始必须早于结束
//! - subtitle：最多 64 字符

use chrono::{DateTime, Utc};

use super::link_form::{FieldErrors, FormField, LinkForm};
use crate::api::{LinkPayload, QrPreferences};
use crate::utils::{TimeParser, validate_url};

pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_SUBTITLE_CHARS: usize = 64;

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_time(
    value: &str,
    field: FormField,
    now: DateTime<Utc>,
    errors: &mut FieldErrors,
) -> Option<DateTime<Utc>> {
    if value.trim().is_empty() {
        return None;
    }
    match TimeParser::parse_at(value, now) {
        Ok(dt) => Some(dt),
        Err(e) => {
            errors.insert(field, format!("Invalid time: {}", e.message()));
            None
        }
    }
}

/// 校验表单，通过时返回请求体
pub fn validate(form: &LinkForm) -> Result<LinkPayload, FieldErrors> {
    validate_at(form, Utc::now())
}

/// 以 `now` 为相对时间基准校验
pub fn validate_at(form: &LinkForm, now: DateTime<Utc>) -> Result<LinkPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    let url = match validate_url(&form.url) {
        Ok(_) => form.url.trim().to_string(),
        Err(e) => {
            errors.insert(FormField::Url, e.to_string());
            String::new()
        }
    };

    let description = optional_text(&form.description);
    if let Some(desc) = &description
        && desc.chars().count() > MAX_DESCRIPTION_CHARS
    {
        errors.insert(
            FormField::Description,
            format!("Description too long (max {} chars)", MAX_DESCRIPTION_CHARS),
        );
    }

    let active_from = parse_time(&form.active_from, FormField::ActiveFrom, now, &mut errors);
    let active_until = parse_time(&form.active_until, FormField::ActiveUntil, now, &mut errors);
    if let (Some(from), Some(until)) = (active_from, active_until)
        && from >= until
    {
        errors.insert(FormField::ActiveUntil, "End must be after start".to_string());
    }

    let subtitle = optional_text(&form.subtitle);
    if let Some(sub) = &subtitle
        && sub.chars().count() > MAX_SUBTITLE_CHARS
    {
        errors.insert(
            FormField::Subtitle,
            format!("Subtitle too long (max {} chars)", MAX_SUBTITLE_CHARS),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LinkPayload {
        url,
        description,
        enabled: form.enabled,
        active_from,
        active_until,
        qr: QrPreferences {
            with_logo: form.with_logo,
            subtitle,
        },
    })
}
