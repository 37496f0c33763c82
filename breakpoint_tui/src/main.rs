//! breakpoint_tui - Interactive TUI for substat breakpoint lookup

mod app;
mod ui;

use anyhow::{Context, Result};
use app::{App, InputMode};
use breakpoint_core::{default_catalog, StatCatalog};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let _guard = setup_logging()?;

    // Optional catalog path as the first argument
    let catalog = match std::env::args().nth(1) {
        Some(path) => StatCatalog::load(Path::new(&path))
            .with_context(|| format!("loading catalog from {}", path))?,
        None => default_catalog().context("parsing built-in catalog")?,
    };

    let mut app = App::new(&catalog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(%err, "terminal loop failed");
    }
    result.map_err(Into::into)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let keep_running = match app.input_mode {
                    InputMode::Normal => handle_normal_key(app, key),
                    InputMode::Editing => {
                        handle_editing_key(app, key);
                        true
                    }
                };
                if !keep_running {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns false when the user asked to quit
fn handle_normal_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return false,
        (KeyCode::Tab, _) => app.next_tab(),
        (KeyCode::BackTab, _) => app.prev_tab(),
        (KeyCode::Char(c @ '1'..='9'), _) => app.set_tab(c as usize - '1' as usize),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => {
            app.increment()
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::Char('-'), _) => app.decrement(),
        (KeyCode::Enter, _) | (KeyCode::Char('e'), _) => app.begin_edit(),
        (KeyCode::Char('r'), _) => app.reset(),
        (KeyCode::Char('?'), _) => app.toggle_help(),
        _ => {}
    }
    true
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => app.push_char(c),
        _ => {}
    }
}

/// Log to a file in the temp directory so output never lands on the TUI
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = std::env::temp_dir();
    let file_appender = tracing_appender::rolling::never(&log_dir, "breakpoint_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Log file: {}/breakpoint_tui.log", log_dir.display());

    Ok(guard)
}
