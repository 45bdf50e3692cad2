//! cli::commands
//!
//! Operation parsing, dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Prompts for any input the operation needs
//! 2. Calls the repository operation
//! 3. Formats and displays the outcome
//!
//! Domain failures (negative counts, unknown ids, duplicate names) are
//! reported to the user and the session continues. Only I/O failures end a
//! session with an error. End of input while a handler is prompting ends the
//! session like `quit`.

mod completion;
mod create;
mod inspect;
mod rewrite;

pub use completion::completion;

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::cli::repl::Session;
use crate::core::repository::Repository;

/// Operations understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Head,
    History,
    Commit,
    Reset,
    Drop,
    Squash,
    Quit,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 8] = [
        Operation::Create,
        Operation::Head,
        Operation::History,
        Operation::Commit,
        Operation::Reset,
        Operation::Drop,
        Operation::Squash,
        Operation::Quit,
    ];

    /// Parse an operation name. Names are matched exactly.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// The operation's name as typed by the user.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Head => "head",
            Operation::History => "history",
            Operation::Commit => "commit",
            Operation::Reset => "reset",
            Operation::Drop => "drop",
            Operation::Squash => "squash",
            Operation::Quit => "quit",
        }
    }

    /// Whether the operation acts on an existing repository.
    pub fn needs_repository(self) -> bool {
        !matches!(self, Operation::Create | Operation::Quit)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the session keeps going after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatch an operation to its handler.
///
/// `name` has already been checked to exist for operations that need a
/// repository.
pub fn dispatch<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    operation: Operation,
    name: &str,
) -> Result<Flow> {
    match operation {
        Operation::Create => create::create(session, name),
        Operation::Head => inspect::head(session, name),
        Operation::History => inspect::history(session, name),
        Operation::Commit => rewrite::commit(session, name),
        Operation::Reset => rewrite::reset(session, name),
        Operation::Drop => rewrite::drop(session, name),
        Operation::Squash => rewrite::squash(session, name),
        Operation::Quit => Ok(Flow::Quit),
    }
}

/// Look up a repository the session has already validated.
fn repository<'s, R: BufRead, W: Write>(
    session: &'s mut Session<R, W>,
    name: &str,
) -> Result<&'s mut Repository> {
    session
        .registry_mut()
        .get_mut(name)
        .ok_or_else(|| anyhow!("repository '{}' not found", name))
}

/// Reply shown for a count that is negative or not a number.
const INVALID_COUNT: &str = "Please enter a positive integer";

/// Shown where a head id would be, for an empty repository.
const NO_COMMITS: &str = "No commits";
