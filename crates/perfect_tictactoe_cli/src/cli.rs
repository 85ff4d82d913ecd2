//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log search diagnostics
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Let the computer play X and move first
        #[arg(long)]
        computer_first: bool,
    },

    /// Watch the computer play itself
    Watch,

    /// Evaluate a board given as 9 symbols from X, O and _ (row-major)
    Analyze {
        /// Board snapshot, e.g. X___O___X
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            computer_first: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tictactoe", "analyze", "X___O___X", "--json", "--debug"]);
        assert!(cli.debug);
        assert_eq!(
            cli.command,
            Some(Command::Analyze {
                board: "X___O___X".to_string(),
                json: true
            })
        );
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from(["tictactoe", "play", "--computer-first"]);
        assert_eq!(
            cli.command,
            Some(Command::Play {
                computer_first: true
            })
        );
    }
}
