//! Link create/edit forms

pub mod controller;
pub mod link_form;
pub mod schema;

pub use controller::FormController;
pub use link_form::{FieldErrors, FormField, FormMode, LinkForm};
pub use schema::{MAX_DESCRIPTION_CHARS, MAX_SUBTITLE_CHARS, validate};
