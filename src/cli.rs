//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkdeck using clap's derive macros.

use clap::{Parser, Subcommand};

/// linkdeck - terminal console for a URL shortener API
#[derive(Parser)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(
    about = "Manage short links, QR codes and admin actions from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (default: linkdeck.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// List short links (one page)
    List {
        /// Page number, starting at 1
        #[arg(
            long,
            short = 'p',
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        page: u64,

        /// Page size for this call (persisted)
        #[arg(long)]
        page_size: Option<u64>,

        /// Export the page to a CSV file instead of printing
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show one link by id
    Show {
        id: i64,
    },

    /// Create a short link
    Add {
        /// Destination URL
        url: String,

        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Start of the active window (RFC3339, "2025-01-01", "2025-01-01 09:00" or relative like "1d")
        #[arg(long)]
        from: Option<String>,

        /// End of the active window
        #[arg(long)]
        until: Option<String>,

        /// Create the link disabled
        #[arg(long)]
        disabled: bool,

        /// Overlay the configured logo on the QR code
        #[arg(long)]
        logo: bool,

        /// Caption under the QR code
        #[arg(long)]
        subtitle: Option<String>,
    },

    /// Update a short link (fields not given keep their current value)
    Update {
        id: i64,

        #[arg(long)]
        url: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        until: Option<String>,

        /// Clear the active window
        #[arg(long, conflicts_with_all = ["from", "until"])]
        clear_window: bool,

        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        #[arg(long)]
        disable: bool,

        /// Toggle the QR logo on or off
        #[arg(long)]
        logo: Option<bool>,

        #[arg(long)]
        subtitle: Option<String>,
    },

    /// Delete a short link
    Remove {
        id: i64,
    },

    /// Transfer a link to another owner
    Transfer {
        id: i64,

        /// New owner user id
        new_owner_id: i64,
    },

    /// Show access statistics for a link
    Stats {
        id: i64,
    },

    /// Render the QR code of a link
    Qr {
        id: i64,

        /// Output PNG path (default: qr-<short_code>.png)
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Minimum size in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Error correction level (L, M, Q, H)
        #[arg(long)]
        ec: Option<String>,

        /// Caption text (defaults to the link's subtitle)
        #[arg(long)]
        caption: Option<String>,

        /// Logo image (defaults to qr.logo_path when the link asks for a logo)
        #[arg(long)]
        logo: Option<String>,

        /// Copy the image to the clipboard instead of saving
        #[arg(long)]
        copy: bool,

        /// Print the code to the terminal
        #[arg(long)]
        print: bool,
    },

    /// Look up where a short code points (public endpoint)
    Resolve {
        code: String,

        /// Ask the redirect endpoint for the Location target instead
        #[arg(long)]
        redirect: bool,
    },

    /// Admin actions
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Show or change local preferences
    Prefs {
        #[arg(long)]
        page_size: Option<u64>,

        /// Notification language (en, zh)
        #[arg(long)]
        language: Option<String>,
    },

    /// Show the current session user
    Whoami,

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Search all links
    Search {
        query: String,

        #[arg(
            long,
            short = 'p',
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        page: u64,
    },

    /// Disable a short code
    Disable {
        code: String,
    },

    /// View any link by short code
    View {
        code: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate a sample configuration file
    Generate {
        /// Output path (default: linkdeck.example.toml)
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}
