//! QR 预览控制器
//!
//! 目标地址或任一参数变化时自动重新渲染；保存和复制是两个独立动作。

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::clipboard::{ClipboardSink, CopyOutcome};
use super::render::{RenderedQr, render, render_terminal};
use super::{ErrorCorrection, QrRenderOptions};
use crate::errors::{LinkdeckError, Result};

pub struct QrController {
    target: String,
    options: QrRenderOptions,
    rendered: Option<RenderedQr>,
    last_error: Option<String>,
    renders: u64,
}

impl QrController {
    pub fn new(target: impl Into<String>, options: QrRenderOptions) -> Self {
        let mut controller = Self {
            target: target.into(),
            options,
            rendered: None,
            last_error: None,
            renders: 0,
        };
        controller.regenerate();
        controller
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn options(&self) -> &QrRenderOptions {
        &self.options
    }

    pub fn rendered(&self) -> Option<&RenderedQr> {
        self.rendered.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 已执行的渲染次数
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn regenerate(&mut self) {
        self.renders += 1;
        match render(&self.target, &self.options) {
            Ok(rendered) => {
                self.rendered = Some(rendered);
                self.last_error = None;
            }
            Err(e) => {
                warn!("QR render failed for '{}': {}", self.target, e);
                self.rendered = None;
                self.last_error = Some(e.message().to_string());
            }
        }
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target != self.target {
            self.target = target;
            self.regenerate();
        }
    }

    /// 修改参数，有变化时重新渲染
    pub fn update_options(&mut self, change: impl FnOnce(&mut QrRenderOptions)) {
        let mut next = self.options.clone();
        change(&mut next);
        if next != self.options {
            self.options = next;
            self.regenerate();
        }
    }

    pub fn set_options(&mut self, options: QrRenderOptions) {
        self.update_options(|o| *o = options);
    }

    pub fn set_caption(&mut self, caption: Option<String>) {
        self.update_options(|o| o.caption = caption);
    }

    pub fn set_size(&mut self, size_px: u32) {
        self.update_options(|o| *o = o.clone().with_size(size_px));
    }

    pub fn set_error_correction(&mut self, level: ErrorCorrection) {
        self.update_options(|o| o.error_correction = level);
    }

    pub fn cycle_error_correction(&mut self) {
        let next = self.options.error_correction.next();
        self.set_error_correction(next);
    }

    pub fn toggle_quiet_zone(&mut self) {
        self.update_options(|o| o.quiet_zone = !o.quiet_zone);
    }

    fn require_rendered(&self) -> Result<&RenderedQr> {
        self.rendered.as_ref().ok_or_else(|| {
            LinkdeckError::render(
                self.last_error
                    .clone()
                    .unwrap_or_else(|| "QR code not rendered".to_string()),
            )
        })
    }

    /// 保存为 PNG 文件
    pub fn save_png(&self, path: &Path) -> Result<PathBuf> {
        let rendered = self.require_rendered()?;
        rendered.save_png(path)?;
        info!("QR code for {} saved to {}", self.target, path.display());
        Ok(path.to_path_buf())
    }

    /// 复制图片到剪贴板，失败时改为复制链接
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn ClipboardSink) -> Result<CopyOutcome> {
        if let Some(rendered) = &self.rendered {
            let image = rendered.image();
            match clipboard.set_image(
                image.width() as usize,
                image.height() as usize,
                image.as_raw(),
            ) {
                Ok(()) => return Ok(CopyOutcome::Image),
                Err(e) => warn!("Image copy failed, falling back to URL: {}", e),
            }
        }
        clipboard.set_text(&self.target)?;
        Ok(CopyOutcome::UrlFallback)
    }

    /// 终端预览文本
    pub fn to_terminal_string(&self) -> Result<String> {
        render_terminal(
            &self.target,
            self.options.error_correction,
            self.options.quiet_zone,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        fail_image: bool,
        image: Option<(usize, usize)>,
        text: Option<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_image(&mut self, width: usize, height: usize, _rgba: &[u8]) -> Result<()> {
            if self.fail_image {
                return Err(LinkdeckError::clipboard("no image support"));
            }
            self.image = Some((width, height));
            Ok(())
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_regenerates_only_on_change() {
        let mut qr = QrController::new("https://s.example.com/a", QrRenderOptions::default());
        assert_eq!(qr.render_count(), 1);

        qr.set_target("https://s.example.com/a");
        qr.set_error_correction(ErrorCorrection::Medium);
        assert_eq!(qr.render_count(), 1);

        qr.set_target("https://s.example.com/b");
        qr.set_error_correction(ErrorCorrection::High);
        qr.set_caption(Some("Promo".into()));
        assert_eq!(qr.render_count(), 4);
        assert!(qr.rendered().unwrap().has_caption());
    }

    #[test]
    fn test_copy_image() {
        let qr = QrController::new("https://s.example.com/a", QrRenderOptions::default());
        let mut clip = RecordingClipboard::default();
        assert_eq!(qr.copy_to_clipboard(&mut clip).unwrap(), CopyOutcome::Image);
        assert!(clip.image.is_some());
        assert!(clip.text.is_none());
    }

    #[test]
    fn test_copy_falls_back_to_url() {
        let qr = QrController::new("https://s.example.com/a", QrRenderOptions::default());
        let mut clip = RecordingClipboard {
            fail_image: true,
            ..Default::default()
        };
        assert_eq!(
            qr.copy_to_clipboard(&mut clip).unwrap(),
            CopyOutcome::UrlFallback
        );
        assert_eq!(clip.text.as_deref(), Some("https://s.example.com/a"));
    }

    #[test]
    fn test_empty_target_reports_error() {
        let qr = QrController::new("  ", QrRenderOptions::default());
        assert!(qr.rendered().is_none());
        assert!(qr.last_error().is_some());
        assert!(qr.save_png(Path::new("unused.png")).is_err());
    }
}
