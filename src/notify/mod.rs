//! Toast notifier
//!
//! 单槽位的全局提示：新的 `show` 会直接替换当前提示并重新计时，不排队。
//! 自动隐藏由一个 tokio 定时任务负责，替换时先 abort 旧任务；
//! 代数计数保证被替换的定时器即使已经醒来也不会生效。

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub severity: Severity,
    pub duration: Duration,
}

#[derive(Default)]
struct Slot {
    toast: Option<Toast>,
    visible: bool,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Cloneable handle to one toast slot
#[derive(Clone)]
pub struct ToastNotifier {
    slot: Arc<Mutex<Slot>>,
    default_duration: Duration,
}

impl ToastNotifier {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            default_duration,
        }
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn show(&self, text: impl Into<String>, severity: Severity) {
        self.show_for(text, severity, self.default_duration);
    }

    /// 显示提示；`duration` 为零时不会自动隐藏
    pub fn show_for(&self, text: impl Into<String>, severity: Severity, duration: Duration) {
        let toast = Toast {
            text: text.into(),
            severity,
            duration,
        };
        debug!("Toast [{:?}]: {}", toast.severity, toast.text);

        let mut slot = self.slot.lock();
        slot.cancel_timer();
        slot.generation += 1;
        slot.toast = Some(toast);
        slot.visible = true;

        if duration.is_zero() {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            trace!("No tokio runtime, toast stays until replaced");
            return;
        };

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        slot.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = shared.lock();
            if slot.generation == generation {
                slot.visible = false;
                slot.timer = None;
            }
        }));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(text, Severity::Info);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text, Severity::Success);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(text, Severity::Warning);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text, Severity::Error);
    }

    /// 隐藏并取消计时，内容保留
    pub fn hide(&self) {
        let mut slot = self.slot.lock();
        slot.cancel_timer();
        slot.generation += 1;
        slot.visible = false;
    }

    /// 当前可见的提示
    pub fn current(&self) -> Option<Toast> {
        let slot = self.slot.lock();
        if slot.visible { slot.toast.clone() } else { None }
    }

    /// 最近一次的提示内容（不论是否可见）
    pub fn last(&self) -> Option<Toast> {
        self.slot.lock().toast.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.slot.lock().visible
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

static NOTIFIER: OnceLock<ToastNotifier> = OnceLock::new();

/// 进程内共享的提示槽位，时长取自配置
pub fn global_notifier() -> &'static ToastNotifier {
    NOTIFIER.get_or_init(|| {
        let ms = crate::config::get_config().ui.toast_duration_ms;
        ToastNotifier::new(Duration::from_millis(ms))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_without_runtime_is_sticky() {
        let notifier = ToastNotifier::new(Duration::from_millis(10));
        notifier.error("boom");
        let toast = notifier.current().unwrap();
        assert_eq!(toast.text, "boom");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_hide_keeps_content() {
        let notifier = ToastNotifier::default();
        notifier.info("hello");
        notifier.hide();
        assert!(notifier.current().is_none());
        assert_eq!(notifier.last().unwrap().text, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss() {
        let notifier = ToastNotifier::new(Duration::from_millis(100));
        notifier.success("saved");
        assert!(notifier.is_visible());

        tokio::time::sleep(Duration::from_millis(101)).await;
        assert!(!notifier.is_visible());
    }
}
