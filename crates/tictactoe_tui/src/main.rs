//! Tic-tac-toe terminal shell.
//!
//! Two players share one keyboard. The ruleset comes from the config file
//! or `--variant`.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::ShellConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tictactoe_core::{Classic, Ruleset, ThreeStone, Variant};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::resolve(&cli)?;

    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(variant = %config.variant(), "Starting tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = match config.variant() {
        Variant::Classic => run::<Classic>(&mut terminal),
        Variant::ThreeStone => run::<ThreeStone>(&mut terminal),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Shell closed");
    res
}

/// Draw-then-read loop until the user quits.
#[instrument(skip_all, fields(variant = %R::VARIANT))]
fn run<R: Ruleset>(terminal: &mut Term) -> Result<()> {
    let mut app = App::<R>::new();

    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match input::action_for(key) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}
