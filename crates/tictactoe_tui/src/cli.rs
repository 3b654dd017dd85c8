//! Command-line interface for the terminal shell.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Variant;

/// Tic-tac-toe in the terminal, classic or with the three-stone rule
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ruleset to play: "classic" or "three-stone"
    #[arg(short, long)]
    pub variant: Option<Variant>,

    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
