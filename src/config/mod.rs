//! Configuration management
//!
//! - `StaticConfig`: TOML + environment driven settings, loaded once at startup
//! - `PreferenceStore`: user preferences persisted between sessions

mod r#impl;
pub mod preferences;
mod structs;

pub use r#impl::{get_config, init_config, set_config};
pub use preferences::{PreferenceStore, Preferences};
pub use structs::*;
