//! 可复用 UI 组件
//!
//! 提供通用的 UI 组件，减少重复代码

mod input_field;
mod popup;
mod status_indicator;

pub use input_field::InputField;
pub use popup::Popup;
pub use status_indicator::{LinkStatus, StatusIndicator};
