//! Draftboard TUI - fantasy football roster dashboard
//!
//! Destructive roster actions and leaving the dashboard go through a single
//! confirmation dialog before they take effect.

use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use draftboard_tui::app::{App, TuiConfig};

#[derive(Parser)]
#[command(name = "draftboard-tui")]
#[command(about = "Terminal dashboard for Draftboard fantasy football leagues", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/draftboard/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file; nothing is logged without it
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Application entry point with panic handling for terminal restoration
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let config = match &cli.config {
        Some(path) => TuiConfig::load_from(path)?,
        None => TuiConfig::load(),
    };

    let result = run_app(config).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Logs go to a file because stdout belongs to the alternate screen
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            EnvFilter::from_default_env()
                .add_directive("draftboard_tui=info".parse()?)
                .add_directive("draftboard_confirm=info".parse()?),
        )
        .init();

    Ok(())
}

/// Main application runner
async fn run_app(config: TuiConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
