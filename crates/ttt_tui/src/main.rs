//! Tic-tac-toe terminal UI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_tui::{App, Cli, Control, GameConfig, GameEvent, draw};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(
        cli.mode,
        cli.difficulty,
        cli.ai_delay_ms,
    );
    info!(?config, "Starting tic-tac-toe TUI");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, event_tx);
    if cli.skip_welcome {
        app.start_game();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &mut event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

/// Draw, apply background events, read keys; repeat until quit.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("Quitting");
            return Ok(());
        }
    }
}

#[instrument]
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,ttt_tui=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
