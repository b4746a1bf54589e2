//! Preferences and session commands

use std::str::FromStr;

use colored::Colorize;

use crate::auth::{AuthGate, AuthState};
use crate::i18n::Language;
use crate::interfaces::cli::{CliContext, CliError};

pub fn preferences(
    ctx: &mut CliContext,
    page_size: Option<u64>,
    language: Option<String>,
) -> Result<(), CliError> {
    if let Some(size) = page_size {
        let applied = ctx.store.set_page_size(size);
        println!(
            "{} Page size set to {}",
            "✓".bold().green(),
            applied.to_string().cyan()
        );
    }

    if let Some(lang) = language {
        let lang = Language::from_str(&lang)
            .map_err(|_| CliError::ParseError(format!("Unknown language '{}' (en, zh)", lang)))?;
        let prefs = ctx
            .store
            .preferences_mut()
            .ok_or_else(|| CliError::CommandError("Preferences are not available".to_string()))?;
        prefs.set_language(lang)?;
        println!("{} Language set to {}", "✓".bold().green(), lang.to_string().cyan());
    }

    if let Some(prefs) = ctx.store.preferences() {
        println!("{}", "Preferences:".bold().green());
        println!("  {:<10} {}", "file".bold(), prefs.path().display());
        println!("  {:<10} {}", "page_size".bold(), prefs.page_size());
        println!("  {:<10} {}", "language".bold(), prefs.language());
    }
    Ok(())
}

pub async fn whoami(ctx: &mut CliContext) -> Result<(), CliError> {
    let mut gate = AuthGate::new();
    match gate.check(ctx.store.api().as_ref()).await {
        AuthState::Authenticated(user) => {
            let role = if user.is_admin { "admin".magenta() } else { "user".normal() };
            println!(
                "{} {} (id {}, {})",
                "✓".bold().green(),
                user.username.cyan(),
                user.id,
                role
            );
            Ok(())
        }
        AuthState::Denied(reason) => Err(CliError::ApiError(reason.clone())),
        AuthState::Checking => Err(CliError::CommandError(
            "Session check did not finish".to_string(),
        )),
    }
}
