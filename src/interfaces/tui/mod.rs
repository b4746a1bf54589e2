//! Terminal User Interface (TUI) module
//!
//! Interactive console for the link API: session gate, paged list, forms,
//! QR preview and admin search.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use crate::api::{HttpLinkApi, LinkApi};
use crate::config::StaticConfig;
use crate::notify::global_notifier;
use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(config: Arc<StaticConfig>) -> Result<()> {
    let api: Arc<dyn LinkApi> = Arc::new(HttpLinkApi::new(&config.api));
    info!("Starting TUI against {} ({})", config.api.base_url, api.name());
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(16));
    let mut app = App::new(config, api, global_notifier().clone());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
///
/// 无按键时按 tick 重绘，保证提示条到期后消失
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    // 先画出"检查会话"界面，再发请求
    terminal.draw(|f| ui(f, app))?;
    app.check_session().await;

    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if event_handler::handle_key_event(app, key.code).await {
                debug!("TUI exit requested");
                return Ok(());
            }
        }
    }
}
