//! Form submission
//!
//! Validates the form, forwards to the link store and reports the outcome as
//! a toast.

use tracing::info;

use super::link_form::{FormMode, LinkForm};
use super::schema;
use crate::api::LinkEntry;
use crate::errors::{LinkdeckError, Result};
use crate::i18n::{Language, Msg, t};
use crate::notify::ToastNotifier;
use crate::store::LinkStore;

pub struct FormController {
    pub form: LinkForm,
    notifier: ToastNotifier,
    language: Language,
}

impl FormController {
    pub fn create(notifier: ToastNotifier, language: Language) -> Self {
        Self {
            form: LinkForm::new(),
            notifier,
            language,
        }
    }

    pub fn edit(entry: &LinkEntry, notifier: ToastNotifier, language: Language) -> Self {
        Self {
            form: LinkForm::for_entry(entry),
            notifier,
            language,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.form.mode
    }

    /// 提交表单
    ///
    /// 校验失败时错误写入表单字段，不发请求
    pub async fn submit(&mut self, store: &mut LinkStore) -> Result<LinkEntry> {
        let payload = match schema::validate(&self.form) {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.errors = errors;
                self.notifier.warning(t(self.language, Msg::FormInvalid));
                let first = self
                    .form
                    .ordered_errors()
                    .first()
                    .map(|(field, msg)| format!("{}: {}", field.key(), msg))
                    .unwrap_or_default();
                return Err(LinkdeckError::validation(first));
            }
        };
        self.form.errors.clear();

        let (result, success) = match self.form.mode {
            FormMode::Create => (store.create(payload).await, Msg::LinkCreated),
            FormMode::Edit { id } => (store.update(id, payload).await, Msg::LinkUpdated),
        };

        match result {
            Ok(entry) => {
                info!("Form submitted: {} ({})", entry.short_code, entry.id);
                self.notifier.success(t(self.language, success));
                Ok(entry)
            }
            Err(e) => {
                self.notifier.error(e.user_message());
                Err(e)
            }
        }
    }
}
