//! Command-line front end for `perfect_tictactoe`.
//!
//! The binary lives in `main.rs`; everything it drives is exposed here so
//! the game loop can be exercised with in-memory streams.

#![warn(missing_docs)]

pub mod analyze;
pub mod cli;
pub mod commands;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod stopwatch;

pub use analyze::{Analysis, AnalyzeError, analyze};
pub use cli::{Cli, Command};
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use orchestrator::{Orchestrator, Timings};
pub use stopwatch::{Stopwatch, format_duration};
