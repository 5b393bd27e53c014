//! Command-line interface for the tictactoe binary.

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,

    /// How long a finished game's result stays emphasised, in milliseconds
    #[arg(long)]
    pub result_flash_ms: Option<u64>,
}
