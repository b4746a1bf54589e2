//! 链接状态指示器
//!
//! 显示链接的可用状态（禁用、未开始、生效中、即将结束、已结束）

use chrono::{DateTime, Utc};
use ratatui::style::{Color, Style};

use crate::api::{Availability, LinkEntry};
use crate::interfaces::tui::constants::{ENDING_SOON_HOURS, colors, status_text};

/// 链接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Disabled,
    Scheduled,
    Active,
    /// 生效窗口将在 24 小时内结束
    Ending,
    Ended,
}

impl LinkStatus {
    pub fn of(link: &LinkEntry, now: DateTime<Utc>) -> Self {
        match link.availability_at(now) {
            Availability::Disabled => Self::Disabled,
            Availability::Scheduled => Self::Scheduled,
            Availability::Ended => Self::Ended,
            Availability::Active => match link.active_until {
                Some(until) if (until - now).num_hours() < ENDING_SOON_HOURS => Self::Ending,
                _ => Self::Active,
            },
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Disabled => status_text::DISABLED,
            Self::Scheduled => status_text::SCHEDULED,
            Self::Active => status_text::ACTIVE,
            Self::Ending => status_text::ENDING,
            Self::Ended => status_text::ENDED,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Active => colors::SUCCESS,
            Self::Ending | Self::Scheduled => colors::WARNING,
            Self::Ended => colors::ERROR,
            Self::Disabled => colors::MUTED,
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color())
    }
}

/// 状态指示器组件
pub struct StatusIndicator {
    pub status: LinkStatus,
}

impl StatusIndicator {
    pub fn new(link: &LinkEntry) -> Self {
        Self::at(link, Utc::now())
    }

    pub fn at(link: &LinkEntry, now: DateTime<Utc>) -> Self {
        Self {
            status: LinkStatus::of(link, now),
        }
    }

    pub fn text(&self) -> &'static str {
        self.status.text()
    }

    pub fn style(&self) -> Style {
        self.status.style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::app::test_support::entry;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_link_status_active() {
        let link = entry(1, "a");
        assert_eq!(LinkStatus::of(&link, now()), LinkStatus::Active);

        let mut link = entry(1, "a");
        link.active_until = Some(now() + Duration::days(7));
        assert_eq!(LinkStatus::of(&link, now()), LinkStatus::Active);
    }

    #[test]
    fn test_link_status_ending() {
        let mut link = entry(1, "a");
        link.active_until = Some(now() + Duration::hours(12));
        assert_eq!(LinkStatus::of(&link, now()), LinkStatus::Ending);
    }

    #[test]
    fn test_link_status_window_edges() {
        let mut link = entry(1, "a");
        link.active_until = Some(now() - Duration::hours(1));
        assert_eq!(LinkStatus::of(&link, now()), LinkStatus::Ended);

        link.active_until = None;
        link.active_from = Some(now() + Duration::hours(1));
        assert_eq!(LinkStatus::of(&link, now()), LinkStatus::Scheduled);

        link.enabled = false;
        let indicator = StatusIndicator::at(&link, now());
        assert_eq!(indicator.text(), "DISABLED");
    }
}
