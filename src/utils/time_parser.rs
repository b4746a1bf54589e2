//! 时间输入解析
//!
//! 支持的格式：
//! - RFC 3339：`2025-10-01T12:00:00Z`
//! - 日期：`2025-10-01`（当天 00:00 UTC）
//! - 日期时间：`2025-10-01 12:30`（UTC）
//! - 相对时间：`7d`、`1w2d`、`12h`、`1d2h30m`

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{LinkdeckError, Result};

pub struct TimeParser;

impl TimeParser {
    pub fn parse(input: &str) -> Result<DateTime<Utc>> {
        Self::parse_at(input, Utc::now())
    }

    /// 以 `now` 为基准解析，相对时间从 `now` 往后推
    pub fn parse_at(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LinkdeckError::date_parse("时间不能为空"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
            return Ok(dt.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc())
                .ok_or_else(|| LinkdeckError::date_parse(format!("无效的日期: '{}'", input)));
        }

        let offset = Self::parse_relative(input)?;
        now.checked_add_signed(offset)
            .ok_or_else(|| LinkdeckError::date_parse("计算的时间超出了有效范围"))
    }

    fn parse_relative(input: &str) -> Result<Duration> {
        let mut total = Duration::zero();
        let mut rest = input;

        while !rest.is_empty() {
            let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 {
                return Err(LinkdeckError::date_parse(format!(
                    "无效的时间格式: '{}'",
                    input
                )));
            }
            let (num_str, tail) = rest.split_at(digits);
            let num: i64 = num_str
                .parse()
                .map_err(|_| LinkdeckError::date_parse(format!("无效的数字: '{}'", num_str)))?;

            let unit_len: usize = tail
                .chars()
                .take_while(|c| c.is_alphabetic())
                .map(char::len_utf8)
                .sum();
            if unit_len == 0 {
                return Err(LinkdeckError::date_parse(format!(
                    "缺少时间单位，数字 '{}' 后应跟时间单位",
                    num
                )));
            }
            let (unit, tail) = tail.split_at(unit_len);

            let step = match unit {
                "M" | "mo" | "month" | "months" => num.checked_mul(30).and_then(Duration::try_days),
                other => match other.to_lowercase().as_str() {
                    "s" | "sec" | "second" | "seconds" => Duration::try_seconds(num),
                    "m" | "min" | "minute" | "minutes" => Duration::try_minutes(num),
                    "h" | "hour" | "hours" => Duration::try_hours(num),
                    "d" | "day" | "days" => Duration::try_days(num),
                    "w" | "week" | "weeks" => Duration::try_weeks(num),
                    "y" | "year" | "years" => num.checked_mul(365).and_then(Duration::try_days),
                    _ => {
                        return Err(LinkdeckError::date_parse(format!(
                            "不支持的时间单位: '{}'",
                            unit
                        )));
                    }
                },
            };

            total = step
                .and_then(|step| total.checked_add(&step))
                .ok_or_else(|| {
                    LinkdeckError::date_parse(format!("时间间隔超出范围: '{}'", input))
                })?;
            rest = tail;
        }

        if total == Duration::zero() {
            return Err(LinkdeckError::date_parse("时间间隔不能为零"));
        }
        Ok(total)
    }

    /// 人类可读的剩余时间
    pub fn format_remaining(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        let duration = to.signed_duration_since(from);
        if duration.num_seconds() < 0 {
            return "expired".to_string();
        }

        let days = duration.num_days();
        let hours = (duration.num_seconds() % 86400) / 3600;
        let minutes = (duration.num_seconds() % 3600) / 60;

        match (days, hours, minutes) {
            (d, 0, _) if d > 0 => format!("{}d", d),
            (d, h, _) if d > 0 => format!("{}d {}h", d, h),
            (_, h, 0) if h > 0 => format!("{}h", h),
            (_, h, m) if h > 0 => format!("{}h {}m", h, m),
            (_, _, m) if m > 0 => format!("{}m", m),
            _ => format!("{}s", duration.num_seconds()),
        }
    }
}
