//! Trio Games - tic-tac-toe, matching pairs, and 2048 behind one menu.

#![warn(missing_docs)]

mod app;
mod cli;
mod settings;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use settings::AppSettings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output never lands on the alternate screen.
    let log_file = std::fs::File::create("trio_games.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(dark = cli.dark, "Starting Trio Games");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(AppSettings::new(cli.dark));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err:?}");
    }
    res
}

/// Poll-based event loop: draw, resolve elapsed timers, forward input.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        app.on_tick(Instant::now());

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
