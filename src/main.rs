//! empdir-manager binary entry point.
//!
//! Parses CLI options, initializes the terminal in raw mode, runs the TUI
//! event loop, and restores the terminal state on exit.

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Result;

mod app;
mod error;
mod search;
mod store;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "empdir-manager",
    about = "TUI to manage an in-memory employee directory",
    version
)]
struct Cli {
    /// Theme configuration file (key = value, hex colors)
    #[arg(long, value_name = "PATH", default_value = "theme.conf", env = "EMPDIR_THEME")]
    theme: String,

    /// Keybindings configuration file
    #[arg(
        long,
        value_name = "PATH",
        default_value = "keybinds.conf",
        env = "EMPDIR_KEYBINDS"
    )]
    keybinds: String,

    /// Append tracing output to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH", env = "EMPDIR_LOG")]
    log_file: Option<std::path::PathBuf>,
}

/// Send tracing output to the given file. The terminal is in raw mode, so
/// logs must never reach stdout/stderr while the UI runs.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    // &File is Write, so Arc<File> satisfies MakeWriter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref()).map_err(|e| format!("init tracing: {}", e))?;

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let state = app::AppState::with_config(&cli.theme, &cli.keybinds);
    let res = app::run(&mut terminal, state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
