//! Terminal setup and the async event loop.
//!
//! Raw mode plus the alternate screen for the lifetime of the run, mouse
//! capture only when configured, and a restore on every exit path so a
//! failure never leaves the terminal wedged. Dropping the shell at the end
//! of `run_app` drops its job runner, which aborts every pending delayed
//! load.

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::data::DataSource;
use crate::theme::Theme;
use crate::ui::app::AppShell;
use crate::ui::core::EventHandler;

/// Run the dashboard until the user quits.
pub async fn run_app(config: Config, theme: Theme, source: Arc<dyn DataSource>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mouse_enabled = config.ui.mouse_enabled;
    if mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppShell::new(&config, theme, source);
    let mut event_handler = EventHandler::new();
    app.init();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore the terminal whatever happened inside the loop
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppShell,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        if app.handle_event(event) {
            needs_render = true;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
