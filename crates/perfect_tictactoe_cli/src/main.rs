//! tictactoe - play against a perfect computer opponent.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::config::FirstPlayer;
use tictactoe_cli::{Cli, Command, GameConfig, commands};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Filter used with `--debug` when `RUST_LOG` is unset.
const DEBUG_FILTER: &str = "perfect_tictactoe=debug,tictactoe_cli=debug,tictactoe=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    init_tracing(cli.debug || *config.debug());
    info!(?config, "Configuration ready");

    let stdout = io::stdout().lock();
    match cli.command.unwrap_or_default() {
        Command::Play { computer_first } => {
            let config = if computer_first {
                config.with_first_player(FirstPlayer::Computer)
            } else {
                config
            };
            commands::play(&config, io::stdin().lock(), stdout)?;
        }
        Command::Watch => {
            commands::watch(&config, stdout)?;
        }
        Command::Analyze { board, json } => commands::analyze_board(&board, json, stdout)?,
    }
    Ok(())
}

/// Logs to stderr so the transcript on stdout stays clean.
fn init_tracing(debug: bool) {
    let default = if debug { DEBUG_FILTER } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
