//! cli
//!
//! Command-line interface layer for minigit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging and load configuration
//! - Host the REPL session and delegate each operation to a handler
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers in [`commands`] read any extra input,
//! call into [`crate::core::repository`] and print the outcome. History is
//! only ever changed through `Repository` methods.

pub mod args;
pub mod commands;
pub mod repl;

pub use args::{Cli, Command, Shell};
pub use repl::Session;

use crate::core::config::Config;
use crate::logging;
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use tracing::debug;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    match cli.command_or_default() {
        Command::Completion { shell } => commands::completion(shell),
        Command::Repl { script } => {
            let config =
                Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
            if let Some(path) = config.loaded_from() {
                debug!(path = %path.display(), "configuration loaded");
            }
            repl::run(script.as_deref(), config, verbosity)
        }
    }
}
