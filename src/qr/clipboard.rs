//! 剪贴板抽象
//!
//! 图片写入失败时由调用方退回到复制纯文本链接

use crate::errors::Result;

/// 复制结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// 图片已复制
    Image,
    /// 图片复制失败，改为复制链接
    UrlFallback,
}

pub trait ClipboardSink {
    fn set_image(&mut self, width: usize, height: usize, rgba: &[u8]) -> Result<()>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "clipboard")]
mod system {
    use std::borrow::Cow;

    use super::ClipboardSink;
    use crate::errors::{LinkdeckError, Result};

    /// 系统剪贴板（arboard）
    pub struct SystemClipboard {
        inner: arboard::Clipboard,
    }

    impl SystemClipboard {
        pub fn new() -> Result<Self> {
            let inner = arboard::Clipboard::new()
                .map_err(|e| LinkdeckError::clipboard(format!("Clipboard unavailable: {}", e)))?;
            Ok(Self { inner })
        }
    }

    impl ClipboardSink for SystemClipboard {
        fn set_image(&mut self, width: usize, height: usize, rgba: &[u8]) -> Result<()> {
            self.inner
                .set_image(arboard::ImageData {
                    width,
                    height,
                    bytes: Cow::Borrowed(rgba),
                })
                .map_err(|e| LinkdeckError::clipboard(e.to_string()))
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            self.inner
                .set_text(text)
                .map_err(|e| LinkdeckError::clipboard(e.to_string()))
        }
    }
}
