//! CLI interface module
//!
//! Every subcommand is a single store operation followed by coloured output.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::api::{HttpLinkApi, LinkApi};
use crate::cli::{AdminCommands, Commands, ConfigCommands};
use crate::config::{PreferenceStore, Preferences, StaticConfig};
use crate::errors::LinkdeckError;
use crate::forms::FieldErrors;
use crate::i18n::Language;
use crate::store::LinkStore;

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }

    /// 表单校验错误按字段拼接
    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        let mut parts: Vec<String> = crate::forms::FormField::ALL
            .iter()
            .filter_map(|f| errors.get(f).map(|e| format!("{}: {}", f.key(), e)))
            .collect();
        if parts.is_empty() {
            parts.push("invalid input".to_string());
        }
        CliError::ParseError(parts.join("; "))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkdeckError> for CliError {
    fn from(err: LinkdeckError) -> Self {
        match err {
            LinkdeckError::Validation(msg) | LinkdeckError::DateParse(msg) => {
                CliError::ParseError(msg)
            }
            LinkdeckError::FileOperation(msg)
            | LinkdeckError::Render(msg)
            | LinkdeckError::Clipboard(msg)
            | LinkdeckError::Config(msg) => CliError::CommandError(msg),
            other => CliError::ApiError(other.message().to_string()),
        }
    }
}

/// Store plus configuration shared by all commands
pub struct CliContext {
    pub store: LinkStore,
    pub config: Arc<StaticConfig>,
}

impl CliContext {
    pub fn new(config: Arc<StaticConfig>) -> Self {
        let api: Arc<dyn LinkApi> = Arc::new(HttpLinkApi::new(&config.api));
        Self::with_api(api, config)
    }

    pub fn with_api(api: Arc<dyn LinkApi>, config: Arc<StaticConfig>) -> Self {
        let defaults = Preferences {
            page_size: config.ui.default_page_size,
            language: config.ui.language,
        };
        let prefs = PreferenceStore::load(&config.storage.preferences_file, defaults);
        Self {
            store: LinkStore::with_preferences(api, prefs),
            config,
        }
    }

    pub fn language(&self) -> Language {
        self.store
            .preferences()
            .map(|p| p.language())
            .unwrap_or(self.config.ui.language)
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: Arc<StaticConfig>) -> Result<(), CliError> {
    // config generate 不需要连接后端
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return commands::config_generate(output_path, force);
    }

    let mut ctx = CliContext::new(config);
    dispatch(&mut ctx, cmd).await
}

pub async fn dispatch(ctx: &mut CliContext, cmd: Commands) -> Result<(), CliError> {
    use commands::*;

    match cmd {
        Commands::List {
            page,
            page_size,
            csv,
        } => list_links(ctx, page, page_size, csv).await,

        Commands::Show { id } => show_link(ctx, id).await,

        Commands::Add {
            url,
            description,
            from,
            until,
            disabled,
            logo,
            subtitle,
        } => {
            let args = LinkArgs {
                url: Some(url),
                description,
                from,
                until,
                enabled: Some(!disabled),
                with_logo: Some(logo),
                subtitle,
                clear_window: false,
            };
            add_link(ctx, args).await
        }

        Commands::Update {
            id,
            url,
            description,
            from,
            until,
            clear_window,
            enable,
            disable,
            logo,
            subtitle,
        } => {
            let enabled = match (enable, disable) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let args = LinkArgs {
                url,
                description,
                from,
                until,
                enabled,
                with_logo: logo,
                subtitle,
                clear_window,
            };
            update_link(ctx, id, args).await
        }

        Commands::Remove { id } => remove_link(ctx, id).await,

        Commands::Transfer { id, new_owner_id } => transfer_link(ctx, id, new_owner_id).await,

        Commands::Stats { id } => link_stats(ctx, id).await,

        Commands::Qr {
            id,
            output,
            size,
            ec,
            caption,
            logo,
            copy,
            print,
        } => {
            let args = QrArgs {
                output,
                size,
                ec,
                caption,
                logo,
                copy,
                print,
            };
            render_qr(ctx, id, args).await
        }

        Commands::Resolve { code, redirect } => resolve_code(ctx, &code, redirect).await,

        Commands::Admin { action } => match action {
            AdminCommands::Search { query, page } => admin_search(ctx, &query, page).await,
            AdminCommands::Disable { code } => admin_disable(ctx, &code).await,
            AdminCommands::View { code } => admin_view(ctx, &code).await,
        },

        Commands::Prefs {
            page_size,
            language,
        } => preferences(ctx, page_size, language),

        Commands::Whoami => whoami(ctx).await,

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from main".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormField;

    #[test]
    fn test_error_conversion() {
        let err: CliError = LinkdeckError::api::<String>(500, None).into();
        assert_eq!(err.format_simple(), "API error: Operation failed");

        let err: CliError = LinkdeckError::date_parse("bad").into();
        assert!(matches!(err, CliError::ParseError(_)));
    }

    #[test]
    fn test_field_errors_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Subtitle, "too long".into());
        errors.insert(FormField::Url, "URL is required".into());
        let err = CliError::from_field_errors(&errors);
        assert_eq!(
            err.format_simple(),
            "Parse error: url: URL is required; subtitle: too long"
        );
    }
}
