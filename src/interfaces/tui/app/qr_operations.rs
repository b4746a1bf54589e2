//! QR preview actions

use std::path::PathBuf;

use super::state::{App, CurrentScreen};
use crate::i18n::Msg;
use crate::interfaces::tui::constants::QR_SIZE_STEP;
use crate::qr::{CopyOutcome, QrController, QrRenderOptions};

impl App {
    /// 为所选链接（详情页中为正在查看的链接）打开预览，参数取自链接自身的二维码偏好
    pub fn open_qr_preview(&mut self) {
        let link = match self.current_screen {
            CurrentScreen::ViewDetails => self.store.current(),
            _ => self.get_selected_link(),
        };
        let Some(link) = link.cloned() else {
            return;
        };
        let target = self.config.api.short_url(&link.short_code);
        let options = QrRenderOptions::for_link(&self.config.qr, &link);
        self.qr_code = link.short_code;

        match self.qr.as_mut() {
            Some(qr) => {
                qr.set_target(target);
                qr.set_options(options);
            }
            None => self.qr = Some(QrController::new(target, options)),
        }
        self.current_screen = CurrentScreen::QrPreview;
    }

    pub fn close_qr_preview(&mut self) {
        self.current_screen = CurrentScreen::Main;
    }

    pub fn qr_output_path(&self) -> PathBuf {
        PathBuf::from(format!("qr-{}.png", self.qr_code))
    }

    pub fn save_qr(&self) {
        let Some(qr) = self.qr.as_ref() else {
            return;
        };
        match qr.save_png(&self.qr_output_path()) {
            Ok(path) => {
                self.set_status(format!("{}: {}", self.msg(Msg::QrSaved), path.display()))
            }
            Err(e) => self.set_error(e.user_message()),
        }
    }

    #[cfg(feature = "clipboard")]
    pub fn copy_qr(&self) {
        use crate::qr::SystemClipboard;

        let Some(qr) = self.qr.as_ref() else {
            return;
        };
        let result = SystemClipboard::new()
            .and_then(|mut clipboard| qr.copy_to_clipboard(&mut clipboard));
        self.report_copy(result);
    }

    pub fn report_copy(&self, result: crate::errors::Result<CopyOutcome>) {
        match result {
            Ok(CopyOutcome::Image) => self.set_status(self.msg(Msg::QrCopied)),
            Ok(CopyOutcome::UrlFallback) => self.notifier.warning(self.msg(Msg::QrCopiedUrl)),
            Err(e) => self.set_error(e.user_message()),
        }
    }

    pub fn qr_grow(&mut self) {
        if let Some(qr) = self.qr.as_mut() {
            let size = qr.options().size_px.saturating_add(QR_SIZE_STEP);
            qr.set_size(size);
        }
    }

    pub fn qr_shrink(&mut self) {
        if let Some(qr) = self.qr.as_mut() {
            let size = qr.options().size_px.saturating_sub(QR_SIZE_STEP);
            qr.set_size(size);
        }
    }

    pub fn qr_cycle_error_correction(&mut self) {
        if let Some(qr) = self.qr.as_mut() {
            qr.cycle_error_correction();
        }
    }

    pub fn qr_toggle_quiet_zone(&mut self) {
        if let Some(qr) = self.qr.as_mut() {
            qr.toggle_quiet_zone();
        }
    }
}
