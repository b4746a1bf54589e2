//! QR code rendering
//!
//! ```text
//! target URL ──→ qrcode (modules) ──→ RGBA canvas ──→ [logo overlay] ──→ [caption band] ──→ PNG
//!                                 └─→ Unicode half-blocks (terminal preview)
//! ```

pub mod clipboard;
pub mod controller;
pub mod options;
pub mod render;

pub use clipboard::{ClipboardSink, CopyOutcome};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use controller::QrController;
pub use options::QrRenderOptions;
pub use render::{RenderedQr, render, render_terminal};

use qrcode::EcLevel;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// 纠错等级
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl ErrorCorrection {
    pub fn level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::Quartile => EcLevel::Q,
            Self::High => EcLevel::H,
        }
    }

    /// 单字母写法 L/M/Q/H
    pub fn letter(self) -> char {
        match self {
            Self::Low => 'L',
            Self::Medium => 'M',
            Self::Quartile => 'Q',
            Self::High => 'H',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Self::Low),
            'M' => Some(Self::Medium),
            'Q' => Some(Self::Quartile),
            'H' => Some(Self::High),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::Quartile,
            Self::Quartile => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
