//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// QR 预览中每次调整的像素步长
pub const QR_SIZE_STEP: u32 = 64;

/// 到期提醒阈值（小时）
pub const ENDING_SOON_HOURS: i64 = 24;

/// 统计图最多显示的天数
pub const STATS_MAX_DAYS: usize = 14;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 添加/编辑链接弹窗
    pub const LINK_FORM: PopupSize = PopupSize::new(80, 90);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 90);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    /// 查看详情弹窗
    pub const VIEW_DETAILS: PopupSize = PopupSize::new(80, 85);
    /// 二维码预览
    pub const QR_PREVIEW: PopupSize = PopupSize::new(90, 95);
    /// 转移所有权
    pub const TRANSFER: PopupSize = PopupSize::new(60, 35);
    /// 管理员搜索
    pub const ADMIN_SEARCH: PopupSize = PopupSize::new(90, 85);
    /// 会话检查
    pub const AUTH: PopupSize = PopupSize::new(60, 35);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 链接状态文本
pub mod status_text {
    /// 已禁用
    pub const DISABLED: &str = "DISABLED";
    /// 尚未开始
    pub const SCHEDULED: &str = "SCHEDULED";
    /// 生效中
    pub const ACTIVE: &str = "ACTIVE";
    /// 即将结束（24小时内）
    pub const ENDING: &str = "ENDING";
    /// 已结束
    pub const ENDED: &str = "ENDED";
}
