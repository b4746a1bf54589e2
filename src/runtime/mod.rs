//! Application lifecycle and execution modes

pub mod modes;
pub mod startup;

pub use modes::{Mode, detect_mode};
pub use startup::{StartupContext, prepare_startup};
