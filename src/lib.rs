//! linkdeck - a terminal console for URL shortener APIs
//!
//! This library provides the client side of a link-management service:
//! a typed REST client, a paged link store, form validation, QR rendering
//! and the CLI/TUI front ends built on top of them.
//!
//! # Features
//! - **cli**: Command-line subcommands (default)
//! - **tui**: Terminal user interface (default)
//! - **clipboard**: System clipboard support for QR images
//!
//! # Architecture
//! - `api`: Wire types and the HTTP client behind the `LinkApi` trait
//! - `store`: Paged link state and mutations
//! - `auth`: Session gate
//! - `forms`: Create/edit form state and validation
//! - `qr`: QR code rendering, saving and clipboard copy
//! - `notify`: Toast notifications
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration and persisted preferences
//! - `runtime`: Startup and execution modes
//! - `system`: Logging and panic handling

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod i18n;
pub mod interfaces;
pub mod notify;
pub mod qr;
pub mod runtime;
pub mod store;
pub mod system;
pub mod utils;
