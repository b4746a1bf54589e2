//! CLI command implementations

mod admin;
mod config_gen;
mod links;
mod lookup;
mod output;
mod prefs;
mod qr;

pub use admin::*;
pub use config_gen::*;
pub use links::*;
pub use lookup::*;
pub use prefs::*;
pub use qr::*;
