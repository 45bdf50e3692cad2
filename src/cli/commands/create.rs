//! create command - Register a new empty repository

use std::io::{BufRead, Write};

use anyhow::Result;

use super::Flow;
use crate::cli::repl::Session;
use crate::core::registry::RegistryError;

/// Create a repository named `name`.
///
/// Duplicate and empty names are reported to the user; neither ends the
/// session.
pub fn create<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<Flow> {
    let reply = match session.registry_mut().create(name) {
        Ok(repo) => format!("  New repository created: {}", repo.describe()),
        Err(RegistryError::AlreadyExists(_)) => {
            "  **ERROR**: Repository with that name already exists.".to_string()
        }
        Err(RegistryError::InvalidName(_)) => "Please enter a repository name.".to_string(),
    };
    session.say(reply)?;
    Ok(Flow::Continue)
}
