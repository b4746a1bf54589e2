//! QR code command

use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;

use crate::i18n::{Msg, t};
use crate::interfaces::cli::{CliContext, CliError};
use crate::qr::{ErrorCorrection, QrController, QrRenderOptions};

#[derive(Debug, Default)]
pub struct QrArgs {
    pub output: Option<String>,
    pub size: Option<u32>,
    pub ec: Option<String>,
    pub caption: Option<String>,
    pub logo: Option<String>,
    pub copy: bool,
    pub print: bool,
}

/// 解析纠错等级，接受单字母或全称
pub fn parse_error_correction(input: &str) -> Result<ErrorCorrection, CliError> {
    let input = input.trim();
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Some(level) = ErrorCorrection::from_letter(c)
    {
        return Ok(level);
    }
    ErrorCorrection::from_str(input).map_err(|_| {
        CliError::ParseError(format!(
            "Unknown error correction level '{}' (use L, M, Q or H)",
            input
        ))
    })
}

pub async fn render_qr(ctx: &mut CliContext, id: i64, args: QrArgs) -> Result<(), CliError> {
    let entry = ctx.store.fetch(id).await?;
    let target = ctx.config.api.short_url(&entry.short_code);

    let mut options = QrRenderOptions::for_link(&ctx.config.qr, &entry);
    if let Some(size) = args.size {
        options = options.with_size(size);
    }
    if let Some(ec) = &args.ec {
        options.error_correction = parse_error_correction(ec)?;
    }
    if let Some(caption) = args.caption {
        options = options.with_caption(caption);
    }
    if let Some(logo) = args.logo {
        options = options.with_logo(logo);
    }

    let controller = QrController::new(target.clone(), options);
    if let Some(err) = controller.last_error() {
        return Err(CliError::CommandError(format!("QR render failed: {}", err)));
    }

    if args.print {
        println!("{}", controller.to_terminal_string()?);
        println!("  {}", target.cyan());
    }

    if let Some(rendered) = controller.rendered()
        && controller.options().logo.is_some()
        && !rendered.logo_applied()
    {
        println!(
            "{} Logo could not be loaded, rendered without it",
            "⚠".bold().yellow()
        );
    }

    let lang = ctx.language();
    if args.copy {
        return copy_qr(&controller, lang);
    }

    if !args.print || args.output.is_some() {
        let path = PathBuf::from(
            args.output
                .unwrap_or_else(|| format!("qr-{}.png", entry.short_code.replace('/', "_"))),
        );
        let saved = controller.save_png(&path)?;
        println!(
            "{} {}: {}",
            "✓".bold().green(),
            t(lang, Msg::QrSaved),
            saved.display().to_string().blue()
        );
    }
    Ok(())
}

#[cfg(feature = "clipboard")]
fn copy_qr(controller: &QrController, lang: crate::i18n::Language) -> Result<(), CliError> {
    use crate::qr::CopyOutcome;
    use crate::qr::clipboard::SystemClipboard;

    let mut clipboard = SystemClipboard::new()?;
    match controller.copy_to_clipboard(&mut clipboard)? {
        CopyOutcome::Image => println!("{} {}", "✓".bold().green(), t(lang, Msg::QrCopied)),
        CopyOutcome::UrlFallback => {
            println!("{} {}", "⚠".bold().yellow(), t(lang, Msg::QrCopiedUrl))
        }
    }
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn copy_qr(_controller: &QrController, _lang: crate::i18n::Language) -> Result<(), CliError> {
    Err(CliError::CommandError(
        "Clipboard support is not enabled in this build".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_correction() {
        assert_eq!(parse_error_correction("h").unwrap(), ErrorCorrection::High);
        assert_eq!(parse_error_correction("Quartile").unwrap(), ErrorCorrection::Quartile);
        assert!(parse_error_correction("z").is_err());
    }
}
