//! 渲染参数

use std::path::PathBuf;

use image::Rgba;

use super::ErrorCorrection;
use crate::api::LinkEntry;
use crate::config::QrConfig;

pub const MIN_SIZE_PX: u32 = 64;
pub const MAX_SIZE_PX: u32 = 4096;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone, PartialEq)]
pub struct QrRenderOptions {
    /// 二维码部分的最小边长（不含标题栏）
    pub size_px: u32,
    pub error_correction: ErrorCorrection,
    pub quiet_zone: bool,
    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
    pub logo: Option<PathBuf>,
    pub caption: Option<String>,
}

impl Default for QrRenderOptions {
    fn default() -> Self {
        Self {
            size_px: 256,
            error_correction: ErrorCorrection::default(),
            quiet_zone: true,
            dark: BLACK,
            light: WHITE,
            logo: None,
            caption: None,
        }
    }
}

impl QrRenderOptions {
    pub fn from_config(config: &QrConfig) -> Self {
        Self {
            size_px: config.size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX),
            error_correction: config.error_correction,
            quiet_zone: config.quiet_zone,
            ..Self::default()
        }
    }

    /// 按链接自身的二维码偏好补充 logo 和标题
    pub fn for_link(config: &QrConfig, entry: &LinkEntry) -> Self {
        let mut options = Self::from_config(config);
        if entry.qr.with_logo {
            options.logo = config
                .logo_path
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from);
        }
        options.caption = entry
            .qr
            .subtitle
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        options
    }

    pub fn with_size(mut self, size_px: u32) -> Self {
        self.size_px = size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}
