//! Command-line interface for tictactoe_console.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_console")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Play a single game and exit
    #[arg(long)]
    pub once: bool,
}
