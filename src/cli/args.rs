//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Results only, no banner, menus or prompts

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// minigit - An in-memory commit history you drive from a console
#[derive(Parser, Debug)]
#[command(name = "mg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Results only: no banner, menus or prompts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The command to run; the REPL on stdin when none is given.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Repl { script: None })
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive client (default)
    #[command(
        name = "repl",
        long_about = "Start the interactive client.\n\n\
            Each line names an operation and a repository. Operations that need \
            more input (a count, a message or a commit id) prompt for it on the \
            following line.",
        after_help = "\
OPERATIONS:
    create <repo>     create an empty repository
    head <repo>       show the current head id
    history <repo>    show the most recent commits
    commit <repo>     record a new commit
    reset <repo>      discard the most recent commits
    drop <repo>       remove one commit by id
    squash <repo>     fold a commit's successor into it
    quit              leave the client

WORKFLOW EXAMPLES:
    # Interactive session
    mg

    # Replay a recorded session, printing results only
    mg -q repl --script session.txt"
    )]
    Repl {
        /// Read input lines from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    mg completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    mg completion zsh >> ~/.zshrc

    # Fish
    mg completion fish > ~/.config/fish/completions/mg.fish

    # PowerShell
    mg completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
