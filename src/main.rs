//! Tic-tac-toe for two players sharing a terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, ConsoleDisplay, ConsoleInput, GameConfig, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let input = ConsoleInput::new(std::io::stdin().lock());
    let display = ConsoleDisplay::new(std::io::stdout().lock(), *config.clear_screen());
    let mut session = GameSession::new(input, display, config);

    let scoreboard = session.run()?;
    info!(%scoreboard, games = scoreboard.games(), "Session ended");
    println!("\n{scoreboard}");

    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if cli.no_clear {
        config = config.without_clear_screen();
    }
    if cli.once {
        config = config.with_single_game();
    }
    info!(?config, "Configuration resolved");
    Ok(config)
}
